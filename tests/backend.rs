use std::time::Duration;

use edu_admin::backend::errors::BackendError;
use edu_admin::backend::{
    HospitalWriter, HttpBackend, ListSource, LookupSource, PopupReader, PopupWriter, RecordWriter,
};
use edu_admin::domain::types::{PopupId, RecordId};
use edu_admin::list::{FilterOption, ListQueryState, PageSizes};
use edu_admin::resources::Resource;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer) -> HttpBackend {
    HttpBackend::new(
        format!("{}/", server.uri()),
        Some("secret-key".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn fetch_page_forwards_list_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .and(query_param("search", "moon"))
        .and(query_param("sortBy", "title"))
        .and(query_param("sortOrder", "desc"))
        .and(query_param("category", "science"))
        .and(header("authorization", "Bearer secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 7, "title": "Planets"}],
            "meta": {"total": 21, "page": 2, "limit": 20, "hasNext": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = ListQueryState::from_query(
        "page=2&perPage=20&search=moon&sortBy=title&sortOrder=desc&category=science",
        &["category"],
        &PageSizes::default(),
    );
    let page = backend(&server)
        .fetch_page(Resource::Courses, &state)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0]["title"], "Planets");
    assert_eq!(page.meta.total, 21);
    assert!(page.meta.has_next);
}

#[tokio::test]
async fn lookup_options_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookups/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"value": "en", "label": "English"},
            {"value": "fr", "label": "French"}
        ])))
        .mount(&server)
        .await;

    let options = backend(&server).lookup_options("languages").await.unwrap();
    assert_eq!(
        options,
        vec![
            FilterOption::new("en", "English"),
            FilterOption::new("fr", "French")
        ]
    );
}

#[tokio::test]
async fn status_codes_map_to_errors() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/music/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/music/4"))
        .respond_with(ResponseTemplate::new(409).set_body_string("in use"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/music/5"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/music/6"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let backend = &backend(&server);
    let delete = move |id| backend.delete_record(Resource::Music, RecordId::new(id).unwrap());

    assert!(matches!(delete(3).await, Err(BackendError::NotFound)));
    assert!(matches!(delete(4).await, Err(BackendError::Conflict(body)) if body == "in use"));
    assert!(matches!(delete(5).await, Err(BackendError::Unauthorized)));
    assert!(delete(6).await.is_ok());
}

#[tokio::test]
async fn server_error_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = backend(&server)
        .fetch_page(Resource::Stories, &ListQueryState::new(10))
        .await;
    match result {
        Err(BackendError::Status { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = backend(&server)
        .fetch_page(Resource::Games, &ListQueryState::new(10))
        .await;
    assert!(matches!(result, Err(BackendError::Decode(_))));
}

#[tokio::test]
async fn popup_toggle_round_trip() {
    let server = MockServer::start().await;
    let popup = json!({
        "id": 9,
        "title": "Welcome",
        "message": "Hi",
        "active": true,
        "createdAt": "2026-01-05T10:00:00Z"
    });
    Mock::given(method("GET"))
        .and(path("/popups/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(popup.clone()))
        .mount(&server)
        .await;
    let mut hidden = popup;
    hidden["active"] = json!(false);
    Mock::given(method("PATCH"))
        .and(path("/popups/9"))
        .and(body_json(json!({"active": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(hidden))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend(&server);
    let id = PopupId::new(9).unwrap();
    let current = backend.get_popup(id).await.unwrap().unwrap();
    assert!(current.active);
    let updated = backend.set_popup_active(id, !current.active).await.unwrap();
    assert!(!updated.active);
}

#[tokio::test]
async fn missing_popup_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/popups/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let popup = backend(&server)
        .get_popup(PopupId::new(1).unwrap())
        .await
        .unwrap();
    assert_eq!(popup, None);
}

#[tokio::test]
async fn empty_bulk_upload_skips_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hospitals/bulk"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let created = backend(&server).create_hospitals(&[]).await.unwrap();
    assert_eq!(created, 0);
}
