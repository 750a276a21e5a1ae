use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::domain::StoredAccount;

/// Whole-list blob storage for member accounts.
pub trait AccountStore: Send + Sync {
    fn load(&self) -> Result<Vec<StoredAccount>, StoreError>;
    fn save(&self, accounts: &[StoredAccount]) -> Result<(), StoreError>;
}

/// Error enumeration for account storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("account store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("account store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("account store unavailable: {0}")]
    Unavailable(String),
}

/// JSON file holding the serialized account list.
///
/// A missing file reads as an empty list.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountStore for JsonFileStore {
    fn load(&self) -> Result<Vec<StoredAccount>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, accounts: &[StoredAccount]) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("write lock poisoned".to_string()))?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(accounts)?;
        fs::write(&self.path, payload)?;
        debug!(path = %self.path.display(), count = accounts.len(), "account store saved");
        Ok(())
    }
}
