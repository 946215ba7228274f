use crate::core::SessionStore;
use crate::utils::error::{AppError, Result};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// 每個鍵對應資料目錄下的一個 `<key>.json` 檔案
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '\0']) || key.starts_with('.') {
            return Err(AppError::StorageError {
                message: format!("invalid slot key '{}'", key),
            });
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl SessionStore for FileSessionStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let full_path = self.slot_path(key)?;
        match tokio::fs::read(&full_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        let full_path = self.slot_path(key)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // 先寫暫存檔再改名，避免中途失敗留下半份資料
        let tmp_path = full_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, data).await?;
        tokio::fs::rename(&tmp_path, &full_path).await?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let full_path = self.slot_path(key)?;
        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => {
                tracing::debug!("Removed {}", full_path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 行程內的鍵值槽，clone 之後共用同一份資料
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slots: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.slots.lock().map_err(|_| AppError::StorageError {
            message: "in-memory store lock poisoned".to_string(),
        })
    }
}

impl SessionStore for MemorySessionStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.slots()?.get(key).cloned())
    }

    async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        self.slots()?.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.slots()?.remove(key);
        Ok(())
    }
}
