//! 本地状态文件
//!
//! 管理面板的本地持久化状态（登录令牌、待提交的成绩）保存在一个 JSON 对象文件中，
//! 每次读写都整体加载与整体覆盖。

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

use crate::errors::{Result, SchoolAdminError};

pub struct LocalStore {
    path: PathBuf,
    // 串行化同一进程内的读改写
    lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取指定键，键不存在时返回 `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let _guard = self.lock_state()?;
        let mut state = self.load()?;
        match state.remove(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let _guard = self.lock_state()?;
        let mut state = self.load()?;
        state.insert(key.to_string(), serde_json::to_value(value)?);
        self.save(&state)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock_state()?;
        let mut state = self.load()?;
        if state.remove(key).is_some() {
            self.save(&state)?;
        }
        Ok(())
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| SchoolAdminError::file_operation("Local state lock poisoned"))
    }

    // 文件不存在视为空状态；内容损坏时记录警告并从空状态重新开始
    fn load(&self) -> Result<Map<String, Value>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                warn!(
                    "Local state file {} is not a JSON object, starting fresh",
                    self.path.display()
                );
                Ok(Map::new())
            }
        }
    }

    fn save(&self, state: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> LocalStore {
        let path = std::env::temp_dir().join(format!(
            "school_admin_store_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        LocalStore::new(path)
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = temp_store("missing");
        let value: Option<String> = store.get("auth_token").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_get_remove() {
        let store = temp_store("set_get");
        store.set("auth_token", &"abc").unwrap();
        store.set("counter", &3).unwrap();

        assert_eq!(
            store.get::<String>("auth_token").unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(store.get::<i32>("counter").unwrap(), Some(3));

        store.remove("auth_token").unwrap();
        assert!(store.get::<String>("auth_token").unwrap().is_none());
        // 其他键保持不变
        assert_eq!(store.get::<i32>("counter").unwrap(), Some(3));

        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let store = temp_store("corrupt");
        std::fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert!(store.get::<String>("auth_token").unwrap().is_none());

        store.set("auth_token", &"fresh").unwrap();
        assert_eq!(
            store.get::<String>("auth_token").unwrap().as_deref(),
            Some("fresh")
        );
        let _ = std::fs::remove_file(store.path());
    }
}
