//! Mock backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{
    AnalyticsReader, CourseReader, CourseWriter, HospitalWriter, ListSource, LookupSource,
    PopupReader, PopupWriter, RecordWriter,
};
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

mock! {
    pub Backend {}

    #[async_trait]
    impl ListSource for Backend {
        async fn fetch_page(
            &self,
            resource: Resource,
            state: &ListQueryState,
        ) -> BackendResult<Page<Record>>;
    }

    #[async_trait]
    impl LookupSource for Backend {
        async fn lookup_options(&self, kind: &str) -> BackendResult<Vec<FilterOption>>;
    }

    #[async_trait]
    impl AnalyticsReader for Backend {
        async fn dashboard_stats(&self) -> BackendResult<DashboardStats>;
    }

    #[async_trait]
    impl CourseReader for Backend {
        async fn get_course(&self, id: CourseId) -> BackendResult<Option<Course>>;
    }

    #[async_trait]
    impl CourseWriter for Backend {
        async fn create_course(&self, course: &NewCourse) -> BackendResult<Course>;
        async fn update_course(&self, id: CourseId, course: &NewCourse) -> BackendResult<Course>;
    }

    #[async_trait]
    impl RecordWriter for Backend {
        async fn delete_record(&self, resource: Resource, id: RecordId) -> BackendResult<()>;
    }

    #[async_trait]
    impl HospitalWriter for Backend {
        async fn create_hospitals(&self, hospitals: &[NewHospital]) -> BackendResult<usize>;
    }

    #[async_trait]
    impl PopupReader for Backend {
        async fn get_popup(&self, id: PopupId) -> BackendResult<Option<Popup>>;
    }

    #[async_trait]
    impl PopupWriter for Backend {
        async fn create_popup(&self, popup: &NewPopup) -> BackendResult<Popup>;
        async fn set_popup_active(&self, id: PopupId, active: bool) -> BackendResult<Popup>;
    }
}
