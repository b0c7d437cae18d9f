#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

fn period(name: &str, start: &str, end: &str) -> Value {
    json!({ "name": name, "start_time": start, "end_time": end })
}

#[actix_web::test]
async fn test_overlapping_period_is_rejected() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::ADMIN_USERNAME);

    let req = test::TestRequest::post()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period 1", "09:00", "10:00"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // 09:30-10:30 与 09:00-10:00 重叠
    let req = test::TestRequest::post()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period 2", "09:30", "10:30"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3201);
    assert!(
        body["data"]["start_time"]
            .as_str()
            .unwrap()
            .contains("overlaps with an existing period")
    );

    // 首尾相接允许
    let req = test::TestRequest::post()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period 2", "10:00", "10:40"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_editing_period_ignores_itself() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::ADMIN_USERNAME);

    let req = test::TestRequest::post()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period 1", "08:00", "08:40"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"]["id"].as_i64().unwrap();

    // 延长自身不与自己冲突
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/periods/{id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period 1", "08:00", "08:45"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri("/api/v1/periods/999")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Ghost", "12:00", "12:40"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_period_writes_require_admin() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;

    let req = test::TestRequest::get().uri("/api/v1/periods").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = login!(app, common::STAFF_USERNAME);
    let req = test::TestRequest::get()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period 1", "09:00", "10:00"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_concurrent_overlapping_periods_store_only_one() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::ADMIN_USERNAME);

    let first = test::TestRequest::post()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period A", "09:00", "10:00"))
        .to_request();
    let second = test::TestRequest::post()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(period("Period B", "09:30", "10:30"))
        .to_request();

    let (a, b) = futures_util::join!(
        test::call_service(&app, first),
        test::call_service(&app, second)
    );
    let mut statuses = [a.status(), b.status()];
    statuses.sort_by_key(|s| s.as_u16());
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);

    let req = test::TestRequest::get()
        .uri("/api/v1/periods")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
