//! Client-side session state.
//!
//! The logged-in user lives in an explicit [`Session`] value that pages
//! receive from the app shell. It is persisted as JSON under the
//! `currentUser` key of a small key/value file, populated at login and
//! cleared at logout.

use crate::models::User;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Key under which the current user record is stored
pub const CURRENT_USER_KEY: &str = "currentUser";

/// String key/value store backed by a JSON file
#[derive(Debug, Default)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Open the store at `path`; a missing file is an empty store
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring unreadable local storage {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        debug!("Opened local storage {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// Store that never touches disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub async fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush().await
    }

    pub async fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush().await?;
        }
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let path = path.clone();
        tokio::task::spawn_blocking(move || replace_file(&path, json.as_bytes()))
            .await
            .context("Local storage writer stopped")?
    }
}

/// Write `contents` next to `path` and rename it into place, so readers
/// see either the old file or the new one
fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create a temp file in {}", dir.display()))?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Who is using the app right now
#[derive(Debug)]
pub struct Session {
    storage: LocalStorage,
    current_user: Option<User>,
}

impl Session {
    /// Rebuild the session from whatever the store holds
    pub fn restore(storage: LocalStorage) -> Self {
        let current_user = storage
            .get_item(CURRENT_USER_KEY)
            .and_then(|raw| match serde_json::from_str::<User>(raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Discarding malformed {}: {}", CURRENT_USER_KEY, e);
                    None
                }
            });

        if let Some(user) = &current_user {
            debug!("Restored session for {}", user.email);
        }

        Self {
            storage,
            current_user,
        }
    }

    pub fn anonymous() -> Self {
        Self::restore(LocalStorage::in_memory())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.current_user.as_ref().map(|user| user.user_id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub async fn login(&mut self, user: User) -> Result<()> {
        let json = serde_json::to_string(&user)?;
        self.storage.set_item(CURRENT_USER_KEY, json).await?;
        info!("Logged in as {}", user.email);
        self.current_user = Some(user);
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.storage.remove_item(CURRENT_USER_KEY).await?;
        if let Some(user) = self.current_user.take() {
            info!("Logged out {}", user.email);
        }
        Ok(())
    }
}
