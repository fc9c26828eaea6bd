use std::sync::Arc;

use shared::{domain::RobotId, protocol::ROBOT_DETAIL_PREFIX};
use tracing::debug;

use crate::router::Router;

/// Detail route for `id`. The identifier is appended as-is.
pub fn detail_path(id: &RobotId) -> String {
    format!("{ROBOT_DETAIL_PREFIX}{id}")
}

pub struct DetailNavigator {
    router: Arc<dyn Router>,
}

impl DetailNavigator {
    pub fn new(router: Arc<dyn Router>) -> Self {
        Self { router }
    }

    pub fn details(&self, id: impl Into<RobotId>) {
        let path = detail_path(&id.into());
        debug!(%path, "opening robot details");
        self.router.navigate(&path);
    }
}
