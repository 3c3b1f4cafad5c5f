use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Entity not found")]
    NotFound,

    #[error("Backend rejected the credentials")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// Maps a non-success status and its body to an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => BackendError::NotFound,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized,
            StatusCode::CONFLICT => BackendError::Conflict(body),
            _ => BackendError::Status {
                status: status.as_u16(),
                message: body,
            },
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::from_status(status, err.to_string())
        } else {
            BackendError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}
