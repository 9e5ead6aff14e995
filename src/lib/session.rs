//! Persisted session state. This module owns the `localStorage` backend;
//! routes and features go through `SessionStore` (or `ThemeStore` for the
//! theme key) so the key layout and its lifecycle live in one spot.
//!
//! Layout (kept compatible with existing deployments):
//! - `adminToken`: bearer token for admin routes
//! - `userToken` / `userRefreshToken`: user session tokens
//! - `user`: JSON-serialized `UserProfile` used as a display cache
//!
//! Tokens are bearer credentials and must never be logged.

use super::errors::AppError;
use crate::features::auth::types::{LoginResponse, UserProfile};
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use tracing::warn;

pub const ADMIN_TOKEN_KEY: &str = "adminToken";
pub const USER_TOKEN_KEY: &str = "userToken";
pub const USER_REFRESH_TOKEN_KEY: &str = "userRefreshToken";
pub const USER_KEY: &str = "user";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

/// In-memory store used natively and in tests. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`, looked up on every call so the handle stays `Send`
/// and can live inside Leptos context.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = Self::storage()
            .ok_or_else(|| AppError::Storage("Local storage is unavailable.".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage("Unable to persist session.".to_string()))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// A signed-in site user. Holds bearer tokens, so no `Debug`.
#[derive(Clone, PartialEq)]
pub struct UserSession {
    pub token: String,
    pub refresh_token: Option<String>,
    pub profile: Option<UserProfile>,
}

/// Everything the app knows about who is signed in.
#[derive(Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub admin_token: Option<String>,
    pub user: Option<UserSession>,
}

impl SessionSnapshot {
    pub fn is_admin(&self) -> bool {
        self.admin_token.is_some()
    }

    pub fn is_user(&self) -> bool {
        self.user.is_some()
    }

    pub fn display_name(&self) -> Option<String> {
        self.user
            .as_ref()
            .and_then(|user| user.profile.as_ref())
            .map(|profile| profile.name.clone())
    }
}

/// Owner of the persisted session keys.
#[derive(Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Reads the persisted session once at startup. Entries that cannot be
    /// used (blank tokens, an unreadable `user` cache) are removed so later
    /// reads see a consistent state.
    pub fn init(&self) -> SessionSnapshot {
        let admin_token = self.read_token(ADMIN_TOKEN_KEY);

        let user = match self.read_token(USER_TOKEN_KEY) {
            Some(token) => Some(UserSession {
                token,
                refresh_token: self.read_token(USER_REFRESH_TOKEN_KEY),
                profile: self.read_profile(),
            }),
            None => {
                self.clear_user();
                None
            }
        };

        SessionSnapshot { admin_token, user }
    }

    pub fn admin_token(&self) -> Option<String> {
        self.read_token(ADMIN_TOKEN_KEY)
    }

    pub fn user_token(&self) -> Option<String> {
        self.read_token(USER_TOKEN_KEY)
    }

    /// Persists an admin login.
    pub fn store_admin(&self, token: &str) -> Result<(), AppError> {
        self.storage.set(ADMIN_TOKEN_KEY, token.trim())
    }

    /// Persists a user login, replacing any previous user session.
    pub fn store_user(&self, login: &LoginResponse) -> Result<UserSession, AppError> {
        self.clear_user();
        self.storage.set(USER_TOKEN_KEY, login.token.trim())?;

        if let Some(refresh_token) = login.refresh_token.as_deref() {
            self.storage.set(USER_REFRESH_TOKEN_KEY, refresh_token.trim())?;
        }

        if let Some(profile) = &login.user {
            let encoded = serde_json::to_string(profile)
                .map_err(|err| AppError::Serialization(format!("Failed to encode user: {err}")))?;
            self.storage.set(USER_KEY, &encoded)?;
        }

        Ok(UserSession {
            token: login.token.trim().to_string(),
            refresh_token: login.refresh_token.clone(),
            profile: login.user.clone(),
        })
    }

    pub fn clear_admin(&self) {
        self.storage.remove(ADMIN_TOKEN_KEY);
    }

    pub fn clear_user(&self) {
        self.storage.remove(USER_TOKEN_KEY);
        self.storage.remove(USER_REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    fn read_token(&self, key: &str) -> Option<String> {
        self.storage
            .get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn read_profile(&self) -> Option<UserProfile> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Some(profile),
            Err(_) => {
                warn!("discarding unreadable cached user profile");
                self.storage.remove(USER_KEY);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ADMIN_TOKEN_KEY, KeyValueStore, MemoryStorage, SessionStore, USER_KEY,
        USER_REFRESH_TOKEN_KEY, USER_TOKEN_KEY,
    };
    use crate::features::auth::types::{LoginResponse, UserProfile};

    fn profile() -> UserProfile {
        UserProfile {
            id: "64f0c0ffee".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Some("user".to_string()),
            avatar: None,
            is_verified: true,
        }
    }

    fn login() -> LoginResponse {
        LoginResponse {
            token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            user: Some(profile()),
        }
    }

    #[test]
    fn init_on_empty_storage_is_signed_out() {
        let store = SessionStore::new(MemoryStorage::default());
        let snapshot = store.init();
        assert!(!snapshot.is_admin());
        assert!(!snapshot.is_user());
    }

    #[test]
    fn store_user_round_trips_through_init() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        assert!(store.store_user(&login()).is_ok());

        let snapshot = store.init();
        let user = snapshot.user.clone();
        assert_eq!(user.as_ref().map(|u| u.token.as_str()), Some("access"));
        assert_eq!(
            user.as_ref().and_then(|u| u.refresh_token.as_deref()),
            Some("refresh")
        );
        assert_eq!(snapshot.display_name().as_deref(), Some("Ada"));
        assert!(storage.get(USER_KEY).is_some_and(|raw| raw.contains("\"_id\"")));
    }

    #[test]
    fn init_drops_corrupted_user_cache() {
        let storage = MemoryStorage::default();
        let _ = storage.set(USER_TOKEN_KEY, "access");
        let _ = storage.set(USER_KEY, "{not json");

        let snapshot = SessionStore::new(storage.clone()).init();

        assert!(snapshot.is_user());
        assert_eq!(snapshot.user.and_then(|user| user.profile), None);
        assert_eq!(storage.get(USER_KEY), None);
    }

    #[test]
    fn init_clears_orphaned_user_entries() {
        let storage = MemoryStorage::default();
        let _ = storage.set(USER_REFRESH_TOKEN_KEY, "refresh");
        let _ = storage.set(USER_KEY, "{}");

        let snapshot = SessionStore::new(storage.clone()).init();

        assert!(!snapshot.is_user());
        assert_eq!(storage.get(USER_REFRESH_TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);
    }

    #[test]
    fn clear_user_keeps_admin_token() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        assert!(store.store_admin("admin-token").is_ok());
        assert!(store.store_user(&login()).is_ok());

        store.clear_user();

        assert_eq!(storage.get(USER_TOKEN_KEY), None);
        assert_eq!(storage.get(USER_REFRESH_TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);
        assert_eq!(storage.get(ADMIN_TOKEN_KEY).as_deref(), Some("admin-token"));
    }

    #[test]
    fn store_user_replaces_previous_refresh_token() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        assert!(store.store_user(&login()).is_ok());

        let without_refresh = LoginResponse {
            token: "second".to_string(),
            refresh_token: None,
            user: None,
        };
        assert!(store.store_user(&without_refresh).is_ok());

        assert_eq!(store.user_token().as_deref(), Some("second"));
        assert_eq!(storage.get(USER_REFRESH_TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);
    }

    #[test]
    fn blank_tokens_are_treated_as_missing() {
        let storage = MemoryStorage::default();
        let _ = storage.set(ADMIN_TOKEN_KEY, "   ");
        let store = SessionStore::new(storage);
        assert_eq!(store.admin_token(), None);
    }
}
