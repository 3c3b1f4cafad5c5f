//! Error conversion glue between the domain layer and the server layers.
//!
//! The domain layer must not depend on service or backend error types, so the
//! conversions live here and only exist with the `server` feature.

use crate::backend::errors::BackendError;
use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for BackendError {
    fn from(val: TypeConstraintError) -> Self {
        BackendError::Validation(val.to_string())
    }
}
