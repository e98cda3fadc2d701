use crate::auth::error::{AuthError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use strum::{Display, EnumString};
use tracing::debug;

/// Name under which the access token is persisted, whatever the backend.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

const KEYRING_SERVICE: &str = "riskwatch";

/// Durable string key-value storage.
///
/// Values are opaque: nothing here validates, expires or encrypts them.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Backends selectable from settings. All of them outlive the process;
/// [`MemoryTokenStorage`] is only reachable by constructing it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TokenStorageKind {
    #[default]
    Keyring,
    File,
}

impl TokenStorageKind {
    /// Build the backend. `data_dir` is only used by [`TokenStorageKind::File`].
    pub fn open(self, data_dir: Option<&Path>) -> Result<Arc<dyn TokenStorage>> {
        match self {
            TokenStorageKind::Keyring => {
                if !cfg!(any(
                    target_os = "macos",
                    target_os = "windows",
                    target_os = "linux"
                )) {
                    return Err(AuthError::Storage(
                        "Keyring not supported on this platform".to_string(),
                    ));
                }
                Ok(Arc::new(KeyringTokenStorage::default()))
            }
            TokenStorageKind::File => {
                let dir = data_dir.ok_or_else(|| {
                    AuthError::Storage("Could not determine data directory".to_string())
                })?;
                Ok(Arc::new(FileTokenStorage::new(dir)))
            }
        }
    }
}

/// OS keyring, one entry per key under the `riskwatch` service.
pub struct KeyringTokenStorage {
    service_name: String,
}

impl Default for KeyringTokenStorage {
    fn default() -> Self {
        Self::new(KEYRING_SERVICE)
    }
}

impl KeyringTokenStorage {
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
        }
    }

    fn entry_user(key: &str) -> String {
        format!("{}:{key}", whoami::username())
    }

    async fn with_entry<T, F>(&self, key: &str, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(keyring::Entry) -> std::result::Result<T, keyring::Error> + Send + 'static,
    {
        let service = self.service_name.clone();
        let user = Self::entry_user(key);

        tokio::task::spawn_blocking(move || {
            let entry = keyring::Entry::new(&service, &user)?;
            op(entry)
        })
        .await
        .map_err(|e| AuthError::Storage(format!("Task join error: {e}")))?
        .map_err(AuthError::from)
    }
}

#[async_trait]
impl TokenStorage for KeyringTokenStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_entry(key, |entry| match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e),
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let value = value.to_string();
        self.with_entry(key, move |entry| entry.set_password(&value))
            .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.with_entry(key, |entry| match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e),
        })
        .await
    }
}

/// One plain-text file per key inside a directory.
pub struct FileTokenStorage {
    dir: PathBuf,
}

impl FileTokenStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local storage; nothing survives a restart.
#[derive(Default)]
pub struct MemoryTokenStorage {
    values: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Access-token helper over a storage backend, always using [`ACCESS_TOKEN_KEY`].
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn TokenStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    pub async fn get_stored_access_token(&self) -> Result<Option<String>> {
        self.storage.get(ACCESS_TOKEN_KEY).await
    }

    pub async fn store_access_token(&self, token: &str) -> Result<()> {
        debug!(target: "riskwatch::auth", "storing access token");
        self.storage.set(ACCESS_TOKEN_KEY, token).await
    }

    pub async fn remove_stored_auth_token(&self) -> Result<()> {
        debug!(target: "riskwatch::auth", "removing access token");
        self.storage.remove(ACCESS_TOKEN_KEY).await
    }
}
