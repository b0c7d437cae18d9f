use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

// 部署环境常用的独立环境变量 -> 配置键
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("app.environment", "APP_ENV"),
    ("app.log_level", "RUST_LOG"),
    ("server.host", "SERVER_HOST"),
    ("server.port", "SERVER_PORT"),
    ("server.unix_socket_path", "UNIX_SOCKET"),
    ("server.workers", "CPU_COUNT"),
    ("jwt.secret", "JWT_SECRET"),
    ("database.url", "DATABASE_URL"),
    ("client.base_url", "API_BASE_URL"),
];

const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

impl AppConfig {
    /// 加载配置
    ///
    /// 优先级从低到高：`config.toml`、`config.<APP_ENV>.toml`、`SCHOOL_ADMIN_*` 环境变量、
    /// [`ENV_OVERRIDES`] 中的独立环境变量。
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("SCHOOL_ADMIN")
                    .separator("_")
                    .try_parsing(true),
            );

        for (key, var) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// 检查取值范围，导入与客户端参数为 0 时无法工作
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (self.import.max_rows == 0, "import.max_rows must be greater than 0"),
            (
                self.import.max_file_size == 0,
                "import.max_file_size must be greater than 0",
            ),
            (
                self.import.reported_errors == 0,
                "import.reported_errors must be greater than 0",
            ),
            (
                self.client.timeout_ms == 0,
                "client.timeout_ms must be greater than 0",
            ),
            (
                self.client.base_url.trim().is_empty(),
                "client.base_url must not be empty",
            ),
            (
                self.jwt.access_token_expiry <= 0,
                "jwt.access_token_expiry must be positive",
            ),
        ];

        if let Some((_, msg)) = checks.iter().find(|(failed, _)| *failed) {
            return Err(ConfigError::Message((*msg).to_string()));
        }

        if self.is_production() && self.jwt.secret == DEFAULT_JWT_SECRET {
            return Err(ConfigError::Message(
                "jwt.secret must be changed in production".to_string(),
            ));
        }

        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 启动时调用，之后 [`AppConfig::get`] 直接返回已加载的配置
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_is_valid() {
        let config = AppConfig::get();
        assert!(config.validate().is_ok());
        assert!(config.import.reported_errors > 0);
    }

    #[test]
    fn test_rejects_zero_import_rows() {
        let mut config = AppConfig::get().clone();
        config.import.max_rows = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("import.max_rows"));
    }

    #[test]
    fn test_production_requires_real_secret() {
        let mut config = AppConfig::get().clone();
        config.app.environment = "production".to_string();
        config.jwt.secret = DEFAULT_JWT_SECRET.to_string();
        assert!(config.validate().is_err());

        config.jwt.secret = "a-long-deployment-secret".to_string();
        assert!(config.validate().is_ok());
    }
}
