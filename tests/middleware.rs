use actix_web::{
    App, HttpResponse,
    http::{StatusCode, header},
    test, web,
};

use edu_admin::middleware::{RedirectUnauthorized, SIGNIN_PATH};

#[actix_web::test]
async fn redirects_unauthorized_to_signin() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::with_uri("/courses?page=2").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), SIGNIN_PATH);
}

#[actix_web::test]
async fn other_statuses_pass_through() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .route("/ok", web::get().to(|| async { HttpResponse::Ok().body("ok") }))
            .route(
                "/gone",
                web::get().to(|| async { HttpResponse::NotFound().finish() }),
            ),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::with_uri("/ok").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "ok");

    let resp = test::call_service(&app, test::TestRequest::with_uri("/gone").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
