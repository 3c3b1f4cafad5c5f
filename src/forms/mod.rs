//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod courses;
pub mod hospitals;
pub mod popups;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid category")]
    InvalidCategory,

    #[error("invalid language code")]
    InvalidLanguage,

    #[error("invalid url")]
    InvalidUrl,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid city")]
    InvalidCity,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid message")]
    InvalidMessage,

    #[error("invalid hospital id")]
    InvalidHospitalId,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Constraint(#[from] TypeConstraintError),

    #[error("csv line {line}: {message}")]
    Csv { line: u64, message: String },
}
