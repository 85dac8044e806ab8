//! Session State
//!
//! The access token lives in `localStorage` under `access_token`; the
//! reactive `Session` mirrors whether one is present so the navbar and
//! route guards update without a reload.

use leptos::*;
use medscan::endpoints::TOKEN_STORAGE_KEY;
use medscan::{guard, Access, TokenStore, TokenStoreError};

/// Token slot backed by browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

impl LocalStorageTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokens {
    fn token(&self) -> Option<String> {
        let token = Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        if token.trim().is_empty() {
            None
        } else {
            Some(token)
        }
    }

    fn set_token(&self, token: Option<&str>) -> Result<(), TokenStoreError> {
        let storage = Self::storage()
            .ok_or_else(|| TokenStoreError::Unavailable("localStorage".to_string()))?;

        let result = match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => storage.set_item(TOKEN_STORAGE_KEY, token),
            None => storage.remove_item(TOKEN_STORAGE_KEY),
        };
        result.map_err(|e| TokenStoreError::Unavailable(format!("{:?}", e)))
    }
}

/// Reactive login state shared by every page
#[derive(Clone, Copy)]
pub struct Session {
    authenticated: RwSignal<bool>,
    /// When the report list was last fetched (ms since epoch)
    pub last_sync: RwSignal<Option<i64>>,
}

/// Provide the session to the component tree
pub fn provide_session() {
    let session = Session {
        authenticated: create_rw_signal(guard(&LocalStorageTokens) == Access::Granted),
        last_sync: create_rw_signal(None),
    };

    provide_context(session);
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Called after the login response stored a token
    pub fn signed_in(&self) {
        self.authenticated
            .set(guard(&LocalStorageTokens) == Access::Granted);
    }

    /// Drop the stored token
    pub fn sign_out(&self) {
        if let Err(e) = LocalStorageTokens.set_token(None) {
            web_sys::console::warn_1(&format!("Failed to clear token: {}", e).into());
        }
        self.authenticated.set(false);
        self.last_sync.set(None);
    }

    pub fn mark_synced(&self) {
        self.last_sync.set(Some(chrono::Utc::now().timestamp_millis()));
    }
}
