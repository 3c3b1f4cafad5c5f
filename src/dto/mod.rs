//! DTO modules that bridge services with templates and APIs.

pub mod courses;
pub mod dashboard;
pub mod list;
