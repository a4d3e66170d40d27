//! Key-value preference store
//!
//! Values are kept in memory and, when a path is configured, mirrored to a
//! JSON object on disk after every write. Writers are serialised so the file
//! always holds the latest in-memory state.

use crate::utils::error::{GatewayError, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Key under which the app records whether notifications are enabled
pub const NOTIFICATIONS_ENABLED_KEY: &str = "@notifications_enabled";

#[derive(Debug, Default)]
pub struct PreferenceStore {
    values: RwLock<BTreeMap<String, String>>,
    path: Option<PathBuf>,
    /// Held from mutation until the file is replaced
    write_lock: Mutex<()>,
}

impl PreferenceStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed store; a missing file starts empty
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                GatewayError::storage(format!(
                    "Preference file {} is corrupt: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Preference file {} not found, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!(entries = values.len(), "Preferences loaded");

        Ok(Self {
            values: RwLock::new(values),
            path: Some(path),
            write_lock: Mutex::new(()),
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let snapshot = {
            let mut values = self.values.write();
            values.insert(key.to_string(), value.to_string());
            values.clone()
        };
        self.persist(&snapshot).await
    }

    pub async fn remove(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.write_lock.lock().await;
        let (removed, snapshot) = {
            let mut values = self.values.write();
            let removed = values.remove(key);
            (removed, values.clone())
        };
        if removed.is_some() {
            self.persist(&snapshot).await?;
        }
        Ok(removed)
    }

    /// Missing or unrecognised values read as disabled
    pub fn notifications_enabled(&self) -> bool {
        self.get(NOTIFICATIONS_ENABLED_KEY).as_deref() == Some("true")
    }

    pub async fn set_notifications_enabled(&self, enabled: bool) -> Result<()> {
        self.set(NOTIFICATIONS_ENABLED_KEY, if enabled { "true" } else { "false" })
            .await
    }

    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }

    /// Callers hold `write_lock`. The temp name is unique so a second process
    /// sharing the file cannot steal it mid-rename.
    async fn persist(&self, snapshot: &BTreeMap<String, String>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(snapshot)?;
        let mut tmp = path.clone().into_os_string();
        tmp.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, content).await?;
        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            warn!("Failed to replace preference file {}: {}", path.display(), e);
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}
