use dioxus::prelude::*;

#[cfg(not(target_family = "wasm"))]
use tourestea_common::session::MemoryStorage;
use tourestea_common::session::SessionStore;

#[cfg(target_family = "wasm")]
mod local {
    use tourestea_common::session::SessionStorage;

    /// Browser localStorage backend for the session store.
    #[derive(Clone, Debug, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl SessionStorage for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) {
            match Self::storage() {
                Some(storage) => {
                    if storage.set_item(key, value).is_err() {
                        tracing::warn!("failed to persist session record");
                    }
                }
                None => tracing::warn!("localStorage unavailable"),
            }
        }

        fn remove(&mut self, key: &str) {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(target_family = "wasm")]
pub type PlatformStorage = local::LocalStorage;

// Non-WASM fallback so the crate type-checks on the host.
#[cfg(not(target_family = "wasm"))]
pub type PlatformStorage = MemoryStorage;

pub type Session = SessionStore<PlatformStorage>;

/// Build the app's session store and restore any saved session. A missing
/// or malformed record just means the app starts logged out.
pub fn new_session() -> Session {
    let mut session = SessionStore::new(PlatformStorage::default());
    if session.restore().is_some() {
        tracing::debug!("restored saved session");
    }
    session
}

/// Shared session store provided as context at the app root.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}
