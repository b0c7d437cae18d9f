#![allow(dead_code, unused_macros)]

use actix_web::web;
use std::sync::Arc;

use school_admin::models::AppStartTime;
use school_admin::models::users::entities::UserRole;
use school_admin::models::users::requests::CreateUserRequest;
use school_admin::routes;
use school_admin::storage::{SeaOrmStorage, Storage};
use school_admin::utils::password::hash_password;
use school_admin::utils::{json_error_handler, query_error_handler};

pub const ADMIN_USERNAME: &str = "admin";
pub const STAFF_USERNAME: &str = "registrar";
pub const PASSWORD: &str = "Registr4r!Pass";

/// 每个测试一个独立的内存数据库
pub async fn test_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::connect("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory storage");
    Arc::new(storage)
}

/// 创建管理员与教务人员两个账号
pub async fn seed_accounts(storage: &Arc<dyn Storage>) {
    for (username, role) in [
        (ADMIN_USERNAME, UserRole::Admin),
        (STAFF_USERNAME, UserRole::Staff),
    ] {
        storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                password_hash: hash_password(PASSWORD).expect("hash"),
                role,
                display_name: None,
            })
            .await
            .expect("seed account");
    }
}

/// 与 main 中相同的应用配置
pub fn configure_app(storage: Arc<dyn Storage>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(AppStartTime {
                start_datetime: chrono::Utc::now(),
            }))
            .configure(routes::configure_api_routes);
    }
}

/// 构造只含一个 `file` 字段的 multipart 请求体
pub fn multipart_file(file_name: &str, content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "----school-admin-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

/// 登录并返回访问令牌
macro_rules! login {
    ($app:expr, $username:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "username": $username,
                "password": common::PASSWORD,
            }))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
        assert_eq!(body["code"], 0, "login failed: {body}");
        body["data"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }};
}
