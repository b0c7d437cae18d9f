use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::AuthService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::services::common::{storage_failure, validation_failed};
use crate::utils::password::verify_password;
use crate::validation::FieldErrors;

const BAD_CREDENTIALS: &str = "Username or password is incorrect";

fn check_credentials(credentials: &LoginRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if credentials.username.trim().is_empty() {
        errors.add("username", "Username is required");
    }
    if credentials.password.is_empty() {
        errors.add("password", "Password is required");
    }
    errors.into_result()
}

pub async fn handle_login(
    service: &AuthService,
    request: &HttpRequest,
    credentials: LoginRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = check_credentials(&credentials) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);
    let username = credentials.username.trim();

    let user = match storage.get_user_by_username(username).await {
        Ok(Some(user)) if verify_password(&credentials.password, &user.password_hash) => user,
        Ok(_) => {
            info!("Failed login attempt for {}", username);
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::AuthFailed, BAD_CREDENTIALS)));
        }
        Err(e) => return Ok(storage_failure("Login", e)),
    };

    if let Err(e) = storage.update_last_login(user.id).await {
        warn!("Failed to record last login for {}: {}", user.username, e);
    }

    let access_token = match user.generate_access_token() {
        Ok(token) => token,
        Err(e) => {
            error!("Signing access token for {} failed: {}", user.username, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    info!("{} signed in as {}", user.username, user.role);
    let response = LoginResponse {
        access_token,
        // 配置以分钟计，响应以秒计
        expires_in: AppConfig::get().jwt.access_token_expiry * 60,
        user,
        created_at: chrono::Utc::now(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_reported_per_field() {
        let errors = check_credentials(&LoginRequest {
            username: "  ".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_some());
    }
}
