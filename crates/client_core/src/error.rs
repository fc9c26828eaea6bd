use thiserror::Error;

/// Failure modes of a robot list load. The robots field is never written
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("invalid endpoint '{path}': {message}")]
    Endpoint { path: String, message: String },
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} returned HTTP {status}: {detail}")]
    Status {
        path: String,
        status: u16,
        detail: String,
    },
    #[error("failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("robot list load task did not complete: {0}")]
    Aborted(String),
}

impl LoadError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
