//! Token Storage
//!
//! The credential token has exactly one persistent home. Components never
//! read browser storage themselves; they go through whichever store was
//! injected at startup, which is what makes the session logic testable
//! off-browser.

use std::cell::RefCell;

/// Fixed storage key for the credential token
pub const TOKEN_KEY: &str = "ripple_token";

/// Persistent home of the credential token.
pub trait TokenStore {
    /// Currently stored token, if any.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);

    /// Remove the stored token. A no-op when nothing is stored.
    fn remove(&self);
}

/// `window.localStorage`-backed store used by the running app.
///
/// Storage being unavailable (private mode, sandboxed frame) degrades to
/// "no token": reads answer `None` and writes are dropped.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// In-memory store for unit tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get(), None);

        store.set("tok-1");
        assert_eq!(store.get().as_deref(), Some("tok-1"));

        store.set("tok-2");
        assert_eq!(store.get().as_deref(), Some("tok-2"));

        store.remove();
        assert_eq!(store.get(), None);
        // Removing twice is fine
        store.remove();
        assert_eq!(store.get(), None);
    }
}
