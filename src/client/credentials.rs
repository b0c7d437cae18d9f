use std::sync::Arc;
use tracing::{debug, warn};

use super::local_store::LocalStore;
use crate::errors::Result;

const TOKEN_KEY: &str = "auth_token";

/// 登录令牌，持久化在本地状态文件中
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<LocalStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    /// 当前令牌；状态文件读取失败时按未登录处理
    pub fn token(&self) -> Option<String> {
        match self.store.get::<String>(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Failed to read stored credentials: {}", e);
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        self.store.set(TOKEN_KEY, &token)
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            warn!("Failed to clear stored credentials: {}", e);
        } else {
            debug!("Stored credentials cleared");
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_clear() {
        let path = std::env::temp_dir().join(format!(
            "school_admin_credentials_{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let credentials = CredentialStore::new(Arc::new(LocalStore::new(&path)));

        assert!(!credentials.is_signed_in());
        credentials.save("token-123").unwrap();
        assert_eq!(credentials.token().as_deref(), Some("token-123"));

        credentials.clear();
        assert!(credentials.token().is_none());
        let _ = std::fs::remove_file(&path);
    }
}
