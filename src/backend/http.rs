use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::backend::errors::{BackendError, BackendResult};
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
use crate::list::query::{PARAM_LIMIT, PARAM_PER_PAGE, ListQueryState};
use crate::list::table::Record;
use crate::resources::Resource;

/// Query parameters sent to the backend for a list page. Same as the URL
/// state except that the page size travels as `limit`.
pub fn list_params(state: &ListQueryState) -> Vec<(&str, String)> {
    state
        .params()
        .into_iter()
        .map(|(key, value)| {
            if key == PARAM_PER_PAGE {
                (PARAM_LIMIT, value)
            } else {
                (key, value)
            }
        })
        .collect()
}

#[derive(Deserialize)]
struct BulkCreated {
    created: usize,
}

/// REST client for the content backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpBackend {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> BackendResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Connection(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn check(response: Response) -> BackendResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::from_status(status, body))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> BackendResult<T> {
        let response = Self::check(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_empty(builder: RequestBuilder) -> BackendResult<()> {
        Self::check(builder.send().await?).await?;
        Ok(())
    }
}

/// Turns a 404 into `None`.
fn optional<T>(result: BackendResult<T>) -> BackendResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(BackendError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

#[async_trait]
impl ListSource for HttpBackend {
    async fn fetch_page(
        &self,
        resource: Resource,
        state: &ListQueryState,
    ) -> BackendResult<Page<Record>> {
        let builder = self
            .request(Method::GET, resource.slug())
            .query(&list_params(state));
        Self::send_json(builder).await
    }
}

#[async_trait]
impl LookupSource for HttpBackend {
    async fn lookup_options(&self, kind: &str) -> BackendResult<Vec<FilterOption>> {
        Self::send_json(self.request(Method::GET, &format!("lookups/{kind}"))).await
    }
}

#[async_trait]
impl AnalyticsReader for HttpBackend {
    async fn dashboard_stats(&self) -> BackendResult<DashboardStats> {
        Self::send_json(self.request(Method::GET, "analytics/summary")).await
    }
}

#[async_trait]
impl CourseReader for HttpBackend {
    async fn get_course(&self, id: CourseId) -> BackendResult<Option<Course>> {
        optional(Self::send_json(self.request(Method::GET, &format!("courses/{id}"))).await)
    }
}

#[async_trait]
impl CourseWriter for HttpBackend {
    async fn create_course(&self, course: &NewCourse) -> BackendResult<Course> {
        Self::send_json(self.request(Method::POST, "courses").json(course)).await
    }

    async fn update_course(&self, id: CourseId, course: &NewCourse) -> BackendResult<Course> {
        Self::send_json(self.request(Method::PUT, &format!("courses/{id}")).json(course)).await
    }
}

#[async_trait]
impl RecordWriter for HttpBackend {
    async fn delete_record(&self, resource: Resource, id: RecordId) -> BackendResult<()> {
        Self::send_empty(self.request(Method::DELETE, &format!("{}/{id}", resource.slug()))).await
    }
}

#[async_trait]
impl HospitalWriter for HttpBackend {
    async fn create_hospitals(&self, hospitals: &[NewHospital]) -> BackendResult<usize> {
        if hospitals.is_empty() {
            return Ok(0);
        }
        let created: BulkCreated =
            Self::send_json(self.request(Method::POST, "hospitals/bulk").json(hospitals)).await?;
        Ok(created.created)
    }
}

#[async_trait]
impl PopupReader for HttpBackend {
    async fn get_popup(&self, id: PopupId) -> BackendResult<Option<Popup>> {
        optional(Self::send_json(self.request(Method::GET, &format!("popups/{id}"))).await)
    }
}

#[async_trait]
impl PopupWriter for HttpBackend {
    async fn create_popup(&self, popup: &NewPopup) -> BackendResult<Popup> {
        Self::send_json(self.request(Method::POST, "popups").json(popup)).await
    }

    async fn set_popup_active(&self, id: PopupId, active: bool) -> BackendResult<Popup> {
        let builder = self
            .request(Method::PATCH, &format!("popups/{id}"))
            .json(&json!({ "active": active }));
        Self::send_json(builder).await
    }
}
