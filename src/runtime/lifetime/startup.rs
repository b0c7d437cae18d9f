use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_ADMIN_USERNAME: &str = "admin";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

// ADMIN_USERNAME 不合法时退回默认用户名
fn admin_username() -> String {
    match std::env::var("ADMIN_USERNAME") {
        Ok(name) => match validate_username(&name) {
            Ok(()) => name,
            Err(msg) => {
                warn!(
                    "ADMIN_USERNAME '{}' rejected ({}), using '{}'",
                    name, msg, DEFAULT_ADMIN_USERNAME
                );
                DEFAULT_ADMIN_USERNAME.to_string()
            }
        },
        Err(_) => DEFAULT_ADMIN_USERNAME.to_string(),
    }
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何账号，则创建一个管理员账号
pub async fn seed_admin(storage: &Arc<dyn Storage>) {
    // 检查是否已有账号
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = match std::env::var("ADMIN_PASSWORD") {
        Ok(pwd) => {
            let policy = validate_password(&pwd);
            if !policy.is_valid {
                warn!(
                    "ADMIN_PASSWORD does not meet the password policy: {}",
                    policy.error_message()
                );
            }
            pwd
        }
        Err(_) => {
            let pwd = generate_random_password(16);
            warn!("==========================================================");
            warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", pwd);
            warn!("  Please save this password or set ADMIN_PASSWORD env var");
            warn!("==========================================================");
            pwd
        }
    };

    // 哈希密码
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        username: admin_username(),
        password_hash,
        role: UserRole::Admin,
        display_name: Some("Administrator".to_string()),
    };

    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括 TLS 加密后端、存储与默认管理员账号
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    StartupContext { storage }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_length_and_charset() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert!(pwd.chars().all(|c| c.is_ascii_alphanumeric() || "!@#$%".contains(c)));
    }
}
