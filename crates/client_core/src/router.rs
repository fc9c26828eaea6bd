//! Navigation capability and the routers shipped with the client.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

pub trait Router: Send + Sync {
    /// Navigates to `path` and records it in history.
    fn navigate(&self, path: &str);
}

/// In-memory router keeping the full navigation history. The most recent
/// entry is the current location.
#[derive(Debug, Default)]
pub struct HistoryRouter {
    entries: Mutex<Vec<String>>,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![path.into()]),
        }
    }

    pub fn current_path(&self) -> Option<String> {
        self.entries().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.entries().clone()
    }

    /// Pops the current location and returns the one now on top.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.entries();
        entries.pop()?;
        entries.last().cloned()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Router for HistoryRouter {
    fn navigate(&self, path: &str) {
        let mut entries = self.entries();
        entries.push(path.to_string());
        debug!(path, depth = entries.len(), "history push");
    }
}

/// Router that only reports navigation requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRouter;

impl Router for TracingRouter {
    fn navigate(&self, path: &str) {
        info!(path, "navigation requested");
    }
}
