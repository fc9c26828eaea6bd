//! View-model fields exposed to the rendering layer.

use std::sync::Arc;

use shared::protocol::RobotList;
use tokio::sync::watch;

/// A single bindable field. Writes replace the value wholesale and wake every
/// subscriber; `None` is the state before the first write.
pub struct ViewField<T> {
    tx: Arc<watch::Sender<Option<T>>>,
}

impl<T> Clone for ViewField<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone> ViewField<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn with_value(value: T) -> Self {
        let (tx, _rx) = watch::channel(Some(value));
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(Some(value));
    }

    pub fn get(&self) -> Option<T> {
        self.tx.borrow().clone()
    }

    pub fn is_unset(&self) -> bool {
        self.tx.borrow().is_none()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Default for ViewField<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded { count: usize },
    Failed { message: String },
}

/// Fields bound by the robots index view.
#[derive(Clone)]
pub struct IndexViewModel {
    pub robots: ViewField<RobotList>,
    pub status: ViewField<LoadStatus>,
}

impl IndexViewModel {
    pub fn new() -> Self {
        Self {
            robots: ViewField::new(),
            status: ViewField::with_value(LoadStatus::Idle),
        }
    }
}

impl Default for IndexViewModel {
    fn default() -> Self {
        Self::new()
    }
}
