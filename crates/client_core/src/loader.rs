use std::sync::Arc;

use shared::protocol::{robot_list_from_value, RobotList};
use tracing::{info, warn};

use crate::{
    error::LoadError,
    http::HttpGet,
    view_model::{IndexViewModel, LoadStatus},
};

pub struct RobotListLoader {
    http: Arc<dyn HttpGet>,
    robots_path: String,
}

impl RobotListLoader {
    pub fn new(http: Arc<dyn HttpGet>, robots_path: impl Into<String>) -> Self {
        Self {
            http,
            robots_path: robots_path.into(),
        }
    }

    pub fn robots_path(&self) -> &str {
        &self.robots_path
    }

    /// Issues exactly one GET against the collection endpoint.
    pub async fn fetch(&self) -> Result<RobotList, LoadError> {
        let body = self.http.get_json(&self.robots_path).await?;
        robot_list_from_value(body).ok_or_else(|| LoadError::Decode {
            path: self.robots_path.clone(),
            message: "expected a JSON array of robot records".to_string(),
        })
    }

    /// Fetches the list and binds it to `view.robots`. On failure the robots
    /// field keeps whatever it held before and only `view.status` changes.
    pub async fn load(&self, view: &IndexViewModel) -> Result<usize, LoadError> {
        view.status.set(LoadStatus::Loading);
        match self.fetch().await {
            Ok(robots) => {
                let count = robots.len();
                view.robots.set(robots);
                view.status.set(LoadStatus::Loaded { count });
                info!(path = %self.robots_path, count, "robot list loaded");
                Ok(count)
            }
            Err(error) => {
                warn!(path = %self.robots_path, %error, "robot list load failed");
                view.status.set(LoadStatus::Failed {
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }
}
