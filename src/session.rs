//! 会话模块
//!
//! Holds the signed-in user and bearer token, persisted through a
//! [`KeyValueStore`] (browser local storage in the app, [`MemoryStore`] in
//! tests). The UI layer wraps a [`SessionStore`] in a signal and shares it
//! through context.

use crate::config::StorageKeys;
use crate::guard::AuthStatus;
use proyectalia_shared::User;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// String key/value persistence.
///
/// Writes report success as `bool`; a failed write never aborts the
/// in-memory update.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.items.borrow_mut().remove(key);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    keys: StorageKeys,
    session: Option<Session>,
    loading: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// A store that has not read storage yet; [`SessionStore::is_loading`]
    /// stays true until [`SessionStore::init`].
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            session: None,
            loading: true,
        }
    }

    /// Rehydrates the session from storage. Anything missing or unreadable
    /// counts as signed out and both keys are cleared.
    pub fn init(&mut self) {
        self.session = self.read_persisted();
        if self.session.is_none() {
            self.clear_persisted();
        }
        self.loading = false;
        debug!(authenticated = self.is_authenticated(), "session initialised");
    }

    fn read_persisted(&self) -> Option<Session> {
        let token = self
            .storage
            .get(&self.keys.token)
            .filter(|t| !t.trim().is_empty())?;
        let raw = self.storage.get(&self.keys.user)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(Session { user, token }),
            Err(e) => {
                warn!("discarding unreadable stored user: {e}");
                None
            }
        }
    }

    fn clear_persisted(&self) {
        self.storage.remove(&self.keys.token);
        self.storage.remove(&self.keys.user);
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => {
                if !self.storage.set(&self.keys.user, &json) {
                    warn!("could not persist user record");
                }
            }
            Err(e) => warn!("could not serialize user record: {e}"),
        }
    }

    pub fn login(&mut self, user: User, token: String) {
        if !self.storage.set(&self.keys.token, &token) {
            warn!("could not persist session token");
        }
        self.persist_user(&user);
        info!(user_id = user.id, "signed in");
        self.session = Some(Session { user, token });
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.clear_persisted();
        if let Some(session) = self.session.take() {
            info!(user_id = session.user.id, "signed out");
        }
    }

    /// Swaps the stored user after a profile edit. No-op when signed out.
    pub fn update_user(&mut self, user: User) {
        if self.session.is_none() {
            warn!("profile update without a session ignored");
            return;
        }
        self.persist_user(&user);
        if let Some(session) = self.session.as_mut() {
            session.user = user;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus {
            loading: self.loading,
            authenticated: self.is_authenticated(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(id: i64, name: &str) -> User {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn store(storage: &MemoryStore) -> SessionStore<MemoryStore> {
        SessionStore::new(storage.clone(), StorageKeys::default())
    }

    #[test]
    fn loading_until_init() {
        let mut session = store(&MemoryStore::new());
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        session.init();
        assert!(!session.is_loading());
    }

    #[test]
    fn init_restores_a_persisted_session() {
        let storage = MemoryStore::new();
        storage.set("proyectalia_token", "tok");
        storage.set("proyectalia_user", r#"{"id":5,"name":"Ana Ruiz","career":"Sistemas"}"#);

        let mut session = store(&storage);
        session.init();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.user().map(|u| u.id), Some(5));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("tok"), None)]
    #[case(None, Some(r#"{"id":1,"name":"Ana"}"#))]
    #[case(Some(""), Some(r#"{"id":1,"name":"Ana"}"#))]
    #[case(Some("tok"), Some("{not json"))]
    #[case(Some("tok"), Some(r#"{"name":"no id"}"#))]
    #[case(Some("tok"), Some("null"))]
    fn broken_persisted_state_is_cleared(#[case] token: Option<&str>, #[case] user: Option<&str>) {
        let storage = MemoryStore::new();
        if let Some(token) = token {
            storage.set("proyectalia_token", token);
        }
        if let Some(user) = user {
            storage.set("proyectalia_user", user);
        }

        let mut session = store(&storage);
        session.init();
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert!(storage.is_empty());
    }

    #[test]
    fn login_then_logout_leaves_nothing_behind() {
        let storage = MemoryStore::new();
        let mut session = store(&storage);
        session.init();

        session.login(user(7, "Carlos Mendoza"), "jwt".into());
        assert!(session.is_authenticated());
        assert_eq!(storage.get("proyectalia_token").as_deref(), Some("jwt"));
        let stored: User = serde_json::from_str(&storage.get("proyectalia_user").unwrap()).unwrap();
        assert_eq!(stored.name, "Carlos Mendoza");

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn login_survives_a_reload() {
        let storage = MemoryStore::new();
        let mut first = store(&storage);
        first.init();
        first.login(user(2, "Lucía"), "abc".into());

        let mut reloaded = store(&storage);
        reloaded.init();
        assert_eq!(reloaded.session(), first.session());
    }

    #[test]
    fn update_user_keeps_the_token() {
        let storage = MemoryStore::new();
        let mut session = store(&storage);
        session.init();
        session.login(user(2, "Lucía"), "abc".into());

        session.update_user(user(2, "Lucía Pérez"));
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Lucía Pérez"));
        assert!(storage.get("proyectalia_user").unwrap().contains("Lucía Pérez"));
    }

    #[test]
    fn update_user_while_signed_out_does_nothing() {
        let storage = MemoryStore::new();
        let mut session = store(&storage);
        session.init();
        session.update_user(user(2, "Nadie"));
        assert!(!session.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn custom_keys_are_honoured() {
        let storage = MemoryStore::new();
        let keys = StorageKeys {
            token: "t".into(),
            user: "u".into(),
        };
        let mut session = SessionStore::new(storage.clone(), keys);
        session.init();
        session.login(user(1, "Ana"), "x".into());
        assert_eq!(storage.get("t").as_deref(), Some("x"));
        assert!(storage.get("proyectalia_token").is_none());
    }
}
