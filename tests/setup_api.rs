#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

#[actix_web::test]
async fn test_term_must_fall_within_year() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::ADMIN_USERNAME);
    let auth = ("Authorization", format!("Bearer {token}"));

    let req = test::TestRequest::post()
        .uri("/api/v1/academic-years")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "2025",
            "start_date": "2025-01-06",
            "end_date": "2025-11-28",
            "is_current": true
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let year_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/terms")
        .insert_header(auth.clone())
        .set_json(json!({
            "academic_year_id": year_id,
            "name": "Term 3",
            "start_date": "2025-09-01",
            "end_date": "2025-12-12"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);
    assert!(body["data"]["end_date"].is_string());
    assert!(body["data"].get("start_date").is_none());

    // 首尾两天都包含在学年内
    let req = test::TestRequest::post()
        .uri("/api/v1/terms")
        .insert_header(auth.clone())
        .set_json(json!({
            "academic_year_id": year_id,
            "name": "Term 1",
            "start_date": "2025-01-06",
            "end_date": "2025-04-04"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // 学年仍被学期引用，不能删除
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/academic-years/{year_id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1007);

    let req = test::TestRequest::post()
        .uri("/api/v1/terms")
        .insert_header(auth)
        .set_json(json!({
            "academic_year_id": 999,
            "name": "Orphan",
            "start_date": "2025-01-06",
            "end_date": "2025-04-04"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1006);
}

#[actix_web::test]
async fn test_fee_structure_total_is_derived() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::ADMIN_USERNAME);
    let auth = ("Authorization", format!("Bearer {token}"));

    let req = test::TestRequest::post()
        .uri("/api/v1/academic-years")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "2025",
            "start_date": "2025-01-06",
            "end_date": "2025-11-28"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let year_id = body["data"]["id"].as_i64().unwrap();

    let mut fee = json!({
        "name": "Grade 7 Term 1",
        "academic_year_id": year_id,
        "tuition_fee": 1500.0,
        "exam_fee": 200.0,
        "lab_fee": 150.0,
        "library_fee": 100.0,
        "sports_fee": 100.0,
        "transportation_fee": 0.0,
        "other_fees": 100.0,
        "due_date": "2025-01-31"
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/fee-structures")
        .insert_header(auth.clone())
        .set_json(&fee)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total_amount"], 2150.0);

    // 每个为负的费用项各自报错
    fee["lab_fee"] = json!(-1.0);
    fee["other_fees"] = json!(-5.0);
    let req = test::TestRequest::post()
        .uri("/api/v1/fee-structures")
        .insert_header(auth)
        .set_json(&fee)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["lab_fee"].is_string());
    assert!(body["data"]["other_fees"].is_string());
    assert!(body["data"].get("tuition_fee").is_none());
}

#[actix_web::test]
async fn test_subject_needs_core_or_elective() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::ADMIN_USERNAME);

    let req = test::TestRequest::post()
        .uri("/api/v1/subjects")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "name": "Mathematics",
            "code": "MATH",
            "is_core": false,
            "is_elective": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_and_me() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["database_ok"], true);

    let token = login!(app, common::STAFF_USERNAME);
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["user"]["username"], common::STAFF_USERNAME);
    assert_eq!(body["data"]["user"]["role"], "staff");
    assert!(body["data"]["user"].get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": common::STAFF_USERNAME, "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_year_cannot_shrink_past_its_terms() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::ADMIN_USERNAME);
    let auth = ("Authorization", format!("Bearer {token}"));

    let req = test::TestRequest::post()
        .uri("/api/v1/academic-years")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "2025",
            "start_date": "2025-01-06",
            "end_date": "2025-11-28",
            "is_current": true
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let year_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/terms")
        .insert_header(auth.clone())
        .set_json(json!({
            "academic_year_id": year_id,
            "name": "Term 3",
            "start_date": "2025-09-01",
            "end_date": "2025-11-28"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/academic-years/{year_id}"))
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "2025",
            "start_date": "2025-01-06",
            "end_date": "2025-06-30",
            "is_current": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);
    assert!(body["data"]["end_date"].is_string());
    assert!(body["data"].get("start_date").is_none());

    // 学年未被修改
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/academic-years/{year_id}"))
        .insert_header(auth.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["end_date"], "2025-11-28");

    // 仍覆盖学期的调整可以保存
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/academic-years/{year_id}"))
        .insert_header(auth)
        .set_json(json!({
            "name": "2025",
            "start_date": "2025-01-13",
            "end_date": "2025-11-28",
            "is_current": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
