//! Access to the content backend REST API.
//!
//! Every concern has its own trait so services can ask only for what they
//! use; [`http::HttpBackend`] implements all of them.

use async_trait::async_trait;

use crate::backend::errors::BackendResult;
use crate::domain::analytics::DashboardStats;
use crate::domain::course::{Course, NewCourse};
use crate::domain::hospital::NewHospital;
use crate::domain::popup::{NewPopup, Popup};
use crate::domain::types::{CourseId, PopupId, RecordId};
use crate::list::filter::FilterOption;
use crate::list::meta::Page;
use crate::list::query::ListQueryState;
use crate::list::table::Record;
use crate::resources::Resource;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpBackend;

#[async_trait]
pub trait ListSource {
    /// Fetches one page of `resource` rows for `state`. Rows come back already
    /// filtered, sorted and paginated.
    async fn fetch_page(
        &self,
        resource: Resource,
        state: &ListQueryState,
    ) -> BackendResult<Page<Record>>;
}

#[async_trait]
pub trait LookupSource {
    async fn lookup_options(&self, kind: &str) -> BackendResult<Vec<FilterOption>>;
}

#[async_trait]
pub trait AnalyticsReader {
    async fn dashboard_stats(&self) -> BackendResult<DashboardStats>;
}

#[async_trait]
pub trait CourseReader {
    async fn get_course(&self, id: CourseId) -> BackendResult<Option<Course>>;
}

#[async_trait]
pub trait CourseWriter {
    async fn create_course(&self, course: &NewCourse) -> BackendResult<Course>;
    async fn update_course(&self, id: CourseId, course: &NewCourse) -> BackendResult<Course>;
}

#[async_trait]
pub trait RecordWriter {
    async fn delete_record(&self, resource: Resource, id: RecordId) -> BackendResult<()>;
}

#[async_trait]
pub trait HospitalWriter {
    /// Creates hospitals in bulk and returns how many were stored.
    async fn create_hospitals(&self, hospitals: &[NewHospital]) -> BackendResult<usize>;
}

#[async_trait]
pub trait PopupReader {
    async fn get_popup(&self, id: PopupId) -> BackendResult<Option<Popup>>;
}

#[async_trait]
pub trait PopupWriter {
    async fn create_popup(&self, popup: &NewPopup) -> BackendResult<Popup>;
    async fn set_popup_active(&self, id: PopupId, active: bool) -> BackendResult<Popup>;
}
