//! Business logic between the HTTP routes and the backend client.
//!
//! Services check roles, validate input and call the backend; routes only
//! translate the outcome into a page, a redirect or a flash message.

use thiserror::Error;

use crate::backend::errors::BackendError;
use crate::forms::FormError;

pub mod courses;
pub mod dashboard;
pub mod hospitals;
pub mod list;
pub mod lookups;
pub mod popups;
pub mod records;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("backend error: {0}")]
    Backend(BackendError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<BackendError> for ServiceError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound => ServiceError::NotFound,
            err => ServiceError::Backend(err),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
