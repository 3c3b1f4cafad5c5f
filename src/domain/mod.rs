//! Domain entities exchanged with the content backend.

pub mod analytics;
pub mod course;
pub mod hospital;
pub mod popup;
pub mod types;
