#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::Value;

use school_admin::models::teachers::requests::TeacherRequest;

async fn seed_teachers(storage: &std::sync::Arc<dyn school_admin::storage::Storage>) {
    for (staff_number, first, last) in [
        ("TSC/2291", "Jane", "Otieno"),
        ("T-002", "Peter", "Mwangi"),
    ] {
        storage
            .create_teacher(TeacherRequest {
                staff_number: staff_number.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: None,
                phone: None,
            })
            .await
            .expect("seed teacher");
    }
}

fn import_request(token: &str, uri: &str, file_name: &str, content: &str) -> test::TestRequest {
    let (content_type, body) = common::multipart_file(file_name, content.as_bytes());
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("Authorization", format!("Bearer {token}")))
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
}

#[actix_web::test]
async fn test_import_with_bad_rows_writes_nothing() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    seed_teachers(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::STAFF_USERNAME);

    let csv = "StaffNumber,Date,Status,Note\n\
               TSC/2291,2025-01-06,P,\n\
               X-404,2025-01-06,A,\n\
               T-002,06/01/2025,L,\n\
               Y-405,2025-01-06,A,\n\
               Z-406,2025-01-06,A,\n";
    let resp = test::call_service(
        &app,
        import_request(&token, "/api/v1/attendance/import", "week1.csv", csv)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 9102);
    assert_eq!(body["data"]["total_errors"], 4);
    let errors = body["data"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0]["row"], 3);
    assert_eq!(errors[0]["field"], "staffNumber");
    assert_eq!(errors[1]["field"], "date");

    // 有效行也不应写入
    let req = test::TestRequest::get()
        .uri("/api/v1/attendance")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 0);
}

#[actix_web::test]
async fn test_import_normalizes_status_and_defaults_date() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    seed_teachers(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::STAFF_USERNAME);

    let csv = "staff_no,date,attendance,remarks\n\
               tsc/2291,,Per,Clinic visit\n\
               T-002,,absent,\n";
    let resp = test::call_service(
        &app,
        import_request(
            &token,
            "/api/v1/attendance/import?date=2025-01-07",
            "week1.csv",
            csv,
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["imported"], 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/attendance?date=2025-01-07")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let statuses: Vec<&str> = items
        .iter()
        .map(|item| item["status"].as_str().unwrap())
        .collect();
    assert!(statuses.contains(&"PERMISSION"));
    assert!(statuses.contains(&"ABSENT"));

    // 再次导入同一天覆盖已有记录
    let csv = "teacherId,status\n1,late\n";
    let resp = test::call_service(
        &app,
        import_request(
            &token,
            "/api/v1/attendance/import?date=2025-01-07",
            "fix.csv",
            csv,
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/attendance?date=2025-01-07&teacher_id=1")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["status"], "LATE");
}

#[actix_web::test]
async fn test_import_rejects_unsupported_files() {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;
    let app = test::init_service(App::new().configure(common::configure_app(storage))).await;
    let token = login!(app, common::STAFF_USERNAME);

    let resp = test::call_service(
        &app,
        import_request(&token, "/api/v1/attendance/import", "week1.pdf", "%PDF-1.7")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 9001);

    let resp = test::call_service(
        &app,
        import_request(
            &token,
            "/api/v1/attendance/import",
            "week1.csv",
            "name,date\nJane,2025-01-06\n",
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 9101);
}
