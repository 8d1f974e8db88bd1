use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::user::User;

/// Storage key for the persisted session record.
pub const SESSION_KEY: &str = "tourestea_user";

/// Minimal key-value persistence seam for the session store, so the backend
/// (browser localStorage, in-memory map) is swappable without touching the
/// store logic.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory backend. Clones share the underlying map, which lets tests
/// simulate a process restart against the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    fn remove(&mut self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Holds the current authenticated user (at most one) and mirrors it into
/// durable storage under [`SESSION_KEY`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<User>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        SessionStore {
            storage,
            current: None,
        }
    }

    /// Read a previously saved session back from storage. A missing or
    /// malformed record means no session; it is never surfaced as an error.
    pub fn restore(&mut self) -> Option<User> {
        let raw = self.storage.get(SESSION_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                self.current = Some(user.clone());
                Some(user)
            }
            Err(_) => None,
        }
    }

    /// Set the active user and persist it, overwriting any prior record.
    pub fn login(&mut self, user: User) {
        if let Ok(json) = serde_json::to_string(&user) {
            self.storage.set(SESSION_KEY, &json);
        }
        self.current = Some(user);
    }

    /// Clear the active user and drop the persisted record.
    pub fn logout(&mut self) {
        self.storage.remove(SESSION_KEY);
        self.current = None;
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Hand back the storage backend (used to simulate restarts in tests).
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_restore_round_trip() {
        let user = User::demo();
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(user.clone());
        assert!(store.is_authenticated());

        // Same storage, fresh store: a process restart.
        let mut store = SessionStore::new(store.into_storage());
        assert!(!store.is_authenticated());
        assert_eq!(store.restore(), Some(user.clone()));
        assert_eq!(store.current(), Some(&user));
    }

    #[test]
    fn test_restore_empty_storage() {
        let mut store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.restore(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_restore_malformed_record() {
        let mut storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "{not json");
        let mut store = SessionStore::new(storage);
        assert_eq!(store.restore(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_persisted_record() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(User::demo());
        store.logout();
        assert!(!store.is_authenticated());

        let mut store = SessionStore::new(store.into_storage());
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(User::demo());
        let second = User::demo();
        store.login(second.clone());

        let mut store = SessionStore::new(store.into_storage());
        assert_eq!(store.restore(), Some(second));
    }
}
