//! 管理面板使用的 REST 客户端
//!
//! 每个请求都先尝试访问后端。遇到 404、连接失败或超时时不直接报错：
//! `GET` 返回该资源登记的离线数据，写操作返回一个"模拟成功"的响应。
//! 不重试，不退避。响应带有 [`DataSource`]，页面据此提示当前展示的是否为离线数据。

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::credentials::CredentialStore;
use super::fixtures::{FixtureSource, Resource, StaticFixtures};
use super::local_store::LocalStore;
use crate::config::ClientConfig;
use crate::errors::{Result, SchoolAdminError};
use crate::models::ApiResponse;
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;

pub const SIMULATED_MESSAGE: &str = "Backend unreachable, change simulated locally";

/// 响应数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fixture,
}

/// 客户端响应：后端的统一响应结构加上数据来源
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub source: DataSource,
    pub status: u16,
    pub envelope: ApiResponse<Value>,
}

impl ClientResponse {
    pub fn is_success(&self) -> bool {
        self.envelope.is_success()
    }

    /// 写操作未到达后端，只在本地模拟
    pub fn is_simulated(&self) -> bool {
        self.source == DataSource::Fixture && self.envelope.data.is_none()
    }

    pub fn message(&self) -> &str {
        &self.envelope.message
    }

    /// 将 `data` 解析为具体类型
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.envelope.data {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// 成功时取出 `data`，否则把后端的错误信息转为错误
    pub fn into_data<T: DeserializeOwned>(self) -> Result<Option<T>> {
        if !self.is_success() {
            return Err(SchoolAdminError::remote_api(format!(
                "{} (code {})",
                self.envelope.message, self.envelope.code
            )));
        }
        self.data_as()
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
    fixtures: Arc<dyn FixtureSource>,
    offline_fixtures: bool,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        credentials: CredentialStore,
        fixtures: Arc<dyn FixtureSource>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| SchoolAdminError::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            fixtures,
            offline_fixtures: true,
        })
    }

    /// 按配置创建客户端，使用内置离线数据
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let store = Arc::new(LocalStore::new(&config.state_path));
        let mut client = Self::new(
            &config.base_url,
            Duration::from_millis(config.timeout_ms),
            CredentialStore::new(store),
            Arc::new(StaticFixtures::builtin()),
        )?;
        client.offline_fixtures = config.offline_fixtures;
        Ok(client)
    }

    /// 关闭离线回退后，网络错误直接返回给调用方
    pub fn with_offline_fixtures(mut self, enabled: bool) -> Self {
        self.offline_fixtures = enabled;
        self
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 登录并保存令牌；登录不走离线回退
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/v1/auth/login"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let envelope: ApiResponse<LoginResponse> = response.json().await?;
        match envelope.data {
            Some(login) if status.is_success() && envelope.is_success() => {
                self.credentials.save(&login.access_token)?;
                Ok(login)
            }
            _ => Err(SchoolAdminError::authentication(envelope.message)),
        }
    }

    pub fn logout(&self) {
        self.credentials.clear();
    }

    pub async fn get(&self, path: &str) -> Result<ClientResponse> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ClientResponse> {
        self.send(Method::POST, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<ClientResponse> {
        self.send(Method::PUT, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<ClientResponse> {
        self.send(Method::PATCH, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ClientResponse> {
        self.send(Method::DELETE, path, None).await
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<ClientResponse> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(token) = self.credentials.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = SchoolAdminError::from(e);
                if err.is_network() {
                    warn!("{} {} failed: {}", method, path, err.message());
                    return self.fallback(&method, path, err);
                }
                return Err(err);
            }
        };

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => {
                // 令牌失效，调用方应跳转到登录页
                self.credentials.clear();
                Err(SchoolAdminError::authentication(
                    "Session expired, please sign in again",
                ))
            }
            StatusCode::NOT_FOUND => self.fallback(
                &method,
                path,
                SchoolAdminError::remote_api(format!("{path} returned 404")),
            ),
            _ => {
                let envelope: ApiResponse<Value> = response.json().await?;
                debug!("{} {} -> {} (code {})", method, path, status, envelope.code);
                Ok(ClientResponse {
                    source: DataSource::Remote,
                    status: status.as_u16(),
                    envelope,
                })
            }
        }
    }

    fn fallback(&self, method: &Method, path: &str, cause: SchoolAdminError) -> Result<ClientResponse> {
        if !self.offline_fixtures {
            return Err(cause);
        }

        if *method != Method::GET {
            return Ok(ClientResponse {
                source: DataSource::Fixture,
                status: StatusCode::OK.as_u16(),
                envelope: ApiResponse::success_without_data(SIMULATED_MESSAGE),
            });
        }

        let data = Resource::parse_path(path).and_then(|target| self.fixtures.fixture_for(target));

        match data {
            Some(data) => {
                debug!("Serving offline data for {}", path);
                Ok(ClientResponse {
                    source: DataSource::Fixture,
                    status: StatusCode::OK.as_u16(),
                    envelope: ApiResponse::success(data, "Showing offline sample data"),
                })
            }
            None => Err(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::periods::entities::Period;

    // 端口 1 上没有服务，连接会被立即拒绝
    fn offline_client(name: &str) -> ApiClient {
        let path = std::env::temp_dir().join(format!(
            "school_admin_api_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        ApiClient::new(
            "http://127.0.0.1:1/",
            Duration::from_secs(2),
            CredentialStore::new(Arc::new(LocalStore::new(path))),
            Arc::new(StaticFixtures::builtin()),
        )
        .unwrap()
    }

    #[test]
    fn test_url_join() {
        let client = offline_client("url");
        assert_eq!(client.base_url(), "http://127.0.0.1:1");
        assert_eq!(client.url("/api/v1/terms"), "http://127.0.0.1:1/api/v1/terms");
        assert_eq!(client.url("api/v1/terms"), "http://127.0.0.1:1/api/v1/terms");
    }

    #[tokio::test]
    async fn test_get_falls_back_to_fixture() {
        let client = offline_client("get");
        let response = client.get("/api/v1/periods").await.unwrap();
        assert_eq!(response.source, DataSource::Fixture);
        assert!(response.is_success());
        assert!(!response.is_simulated());

        let periods: Vec<Period> = response.data_as().unwrap().unwrap();
        assert_eq!(periods[0].name, "Period 1");
    }

    #[tokio::test]
    async fn test_get_single_record_from_fixture() {
        let client = offline_client("single");
        let response = client.get("/api/v1/teachers/1").await.unwrap();
        assert_eq!(response.source, DataSource::Fixture);
        assert_eq!(response.envelope.data.unwrap()["staff_number"], "TSC/2291");
    }

    #[tokio::test]
    async fn test_write_is_simulated() {
        let client = offline_client("write");
        let response = client
            .post("/api/v1/notifications", &serde_json::json!({"title": "x"}))
            .await
            .unwrap();
        assert!(response.is_simulated());
        assert_eq!(response.message(), SIMULATED_MESSAGE);

        let response = client.delete("/api/v1/notifications/1").await.unwrap();
        assert!(response.is_simulated());
    }

    #[tokio::test]
    async fn test_unknown_path_without_fixture_errors() {
        let client = offline_client("unknown");
        let err = client.get("/api/v1/unknown").await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_offline_fixtures_disabled() {
        let client = offline_client("disabled").with_offline_fixtures(false);
        let err = client.get("/api/v1/periods").await.unwrap_err();
        assert!(err.is_network());
    }
}
