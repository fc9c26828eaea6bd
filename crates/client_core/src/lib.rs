//! Client side of the robots index: loads the robot list into the view model
//! and routes to robot detail pages.

pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod loader;
pub mod navigator;
pub mod router;
pub mod view_model;

pub use config::{load_settings, ClientSettings};
pub use controller::IndexController;
pub use error::LoadError;
pub use http::{HttpGet, ReqwestHttpGet};
pub use loader::RobotListLoader;
pub use navigator::{detail_path, DetailNavigator};
pub use router::{HistoryRouter, Router, TracingRouter};
pub use view_model::{IndexViewModel, LoadStatus, ViewField};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
