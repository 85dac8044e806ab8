//! Bearer Token Storage
//!
//! A single slot holding the access token issued at login. Presence of a
//! token is what "logged in" means to the clients; the token itself is
//! never decoded or validated here.

use std::sync::Mutex;
use thiserror::Error;

/// Errors from reading or writing the token slot
#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing storage is not available (no browser storage, poisoned lock)
    #[error("Token storage unavailable: {0}")]
    Unavailable(String),
}

/// The persisted token slot
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored
    fn token(&self) -> Option<String>;

    /// Store a token, or clear the slot with `None`
    fn set_token(&self, token: Option<&str>) -> Result<(), TokenStoreError>;

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Empty or whitespace-only tokens count as absent
pub(crate) fn normalize(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

/// In-process token slot
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Mutex::new(normalize(Some(token)).map(str::to_string)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set_token(&self, token: Option<&str>) -> Result<(), TokenStoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| TokenStoreError::Unavailable(e.to_string()))?;
        *slot = normalize(token).map(str::to_string);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileTokenStore;

#[cfg(feature = "native")]
mod file {
    use super::{normalize, TokenStore, TokenStoreError};
    use std::io::Write;
    use std::path::{Path, PathBuf};

    /// Token slot persisted as a small file
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/medscan/access_token`
        pub fn default_path() -> PathBuf {
            dirs::data_local_dir()
                .map(|p| p.join("medscan"))
                .unwrap_or_else(|| PathBuf::from(".medscan"))
                .join(crate::endpoints::TOKEN_STORAGE_KEY)
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn write(&self, token: &str) -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut options = std::fs::OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }

            let mut file = options.open(&self.path)?;

            // an existing file keeps its old mode on open
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
            }

            file.write_all(token.as_bytes())
        }
    }

    impl TokenStore for FileTokenStore {
        fn token(&self) -> Option<String> {
            match std::fs::read_to_string(&self.path) {
                Ok(content) => normalize(Some(&content)).map(str::to_string),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::warn!("Failed to read token file {:?}: {}", self.path, e);
                    None
                }
            }
        }

        fn set_token(&self, token: Option<&str>) -> Result<(), TokenStoreError> {
            match normalize(token) {
                Some(token) => {
                    self.write(token)?;
                    tracing::debug!("Stored access token at {:?}", self.path);
                }
                None => match std::fs::remove_file(&self.path) {
                    Ok(()) => tracing::debug!("Removed access token at {:?}", self.path),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                },
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_clear() {
        let store = MemoryTokenStore::new();
        assert!(!store.has_token());

        store.set_token(Some("abc.def")).unwrap();
        assert_eq!(store.token().as_deref(), Some("abc.def"));

        store.set_token(None).unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_blank_token_is_absent() {
        let store = MemoryTokenStore::with_token("   ");
        assert!(!store.has_token());

        store.set_token(Some("")).unwrap();
        assert!(!store.has_token());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("access_token"));

        assert_eq!(store.token(), None);
        store.set_token(Some("jwt-token\n")).unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt-token"));

        store.set_token(None).unwrap();
        assert!(!store.path().exists());

        // clearing twice is fine
        store.set_token(None).unwrap();
    }

    #[cfg(all(feature = "native", unix))]
    #[test]
    fn test_file_store_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("access_token"));
        store.set_token(Some("secret")).unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(all(feature = "native", unix))]
    #[test]
    fn test_file_store_tightens_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access_token");
        std::fs::write(&path, "a-much-longer-stale-token").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileTokenStore::new(&path);
        store.set_token(Some("fresh")).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
