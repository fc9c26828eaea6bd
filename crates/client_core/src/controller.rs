use std::sync::Arc;

use shared::domain::RobotId;
use tokio::task::JoinHandle;

use crate::{
    config::ClientSettings,
    error::LoadError,
    http::HttpGet,
    loader::RobotListLoader,
    navigator::DetailNavigator,
    router::Router,
    view_model::{IndexViewModel, LoadStatus},
};

/// Controller behind the robots index view.
///
/// Construction starts the one and only robot list load in the background;
/// [`IndexController::loaded`] hands its outcome back to the caller.
pub struct IndexController {
    view: IndexViewModel,
    navigator: DetailNavigator,
    load_task: Option<JoinHandle<Result<usize, LoadError>>>,
    load_result: Option<Result<usize, LoadError>>,
}

impl IndexController {
    /// Must be called from within a tokio runtime.
    pub fn new(
        http: Arc<dyn HttpGet>,
        router: Arc<dyn Router>,
        view: IndexViewModel,
        settings: &ClientSettings,
    ) -> Self {
        let loader = RobotListLoader::new(http, settings.robots_path.clone());
        view.status.set(LoadStatus::Loading);

        let task_view = view.clone();
        let load_task = tokio::spawn(async move { loader.load(&task_view).await });

        Self {
            view,
            navigator: DetailNavigator::new(router),
            load_task: Some(load_task),
            load_result: None,
        }
    }

    pub fn view(&self) -> &IndexViewModel {
        &self.view
    }

    pub fn details(&self, id: impl Into<RobotId>) {
        self.navigator.details(id);
    }

    /// Waits for the background load and returns its outcome. Later calls
    /// return the same outcome without issuing another request.
    pub async fn loaded(&mut self) -> Result<usize, LoadError> {
        if let Some(task) = self.load_task.as_mut() {
            let joined = task.await;
            self.load_task = None;
            let result = match joined {
                Ok(result) => result,
                Err(join_error) => {
                    let error = LoadError::Aborted(join_error.to_string());
                    self.view.status.set(LoadStatus::Failed {
                        message: error.to_string(),
                    });
                    Err(error)
                }
            };
            self.load_result = Some(result);
        }

        match &self.load_result {
            Some(result) => result.clone(),
            None => Err(LoadError::Aborted("load was never started".to_string())),
        }
    }
}
