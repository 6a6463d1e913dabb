//! Session Manager
//!
//! Holds the current authenticated identity, derived from the stored
//! credential token, and keeps a reactive copy for the view layer.
//! Routing guards read the signal; login/register/logout mutate it.

use std::rc::Rc;

use leptos::*;

use crate::api::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::api::{Api, ApiError};

use super::claims;
use super::store::TokenStore;

/// Reactive session handle provided to the whole component tree.
#[derive(Clone)]
pub struct AuthState {
    /// Current identity, `None` while logged out.
    pub user: RwSignal<Option<User>>,
    store: Rc<dyn TokenStore>,
    api: Api,
}

/// Build the session state from the injected store and put it - together
/// with the API client sharing the same store - into context. The session
/// is computed once here, on application start.
pub fn provide_auth(store: Rc<dyn TokenStore>) {
    let api = Api::new(store.clone());
    let state = AuthState {
        user: create_rw_signal(read_session(store.as_ref())),
        store,
        api: api.clone(),
    };

    provide_context(api);
    provide_context(state);
}

impl AuthState {
    /// Send credentials; on success persist the returned token and set the
    /// session from the returned profile fields. On failure the session
    /// stays empty and the error propagates to the caller.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), ApiError> {
        let response = self.api.login(credentials).await?;
        self.start_session(response);
        Ok(())
    }

    /// Same persistence contract as [`login`](Self::login), via the
    /// registration endpoint.
    pub async fn register(&self, profile: &RegisterRequest) -> Result<(), ApiError> {
        let response = self.api.register(profile).await?;
        self.start_session(response);
        Ok(())
    }

    /// Remove the stored token and clear the in-memory session. Idempotent.
    pub fn logout(&self) {
        self.store.remove();
        self.user.set(None);
    }

    /// Re-derive the session from the stored token and refresh the signal.
    /// The signal is only written when the derived value actually changed.
    pub fn current_user(&self) -> Option<User> {
        let user = read_session(self.store.as_ref());
        if self.user.with_untracked(|current| *current != user) {
            self.user.set(user.clone());
        }
        user
    }

    /// The signed-in username, when there is one.
    pub fn username(&self) -> Option<String> {
        self.user.with(|user| user.as_ref().map(|u| u.username.clone()))
    }

    fn start_session(&self, response: AuthResponse) {
        self.store.set(&response.token);
        self.user.set(Some(response.into_user()));
    }
}

/// Decode the stored token into an identity.
///
/// An expired token is removed from the store as a side effect of the
/// read; a malformed one just reads as logged out and stays put.
pub fn read_session(store: &dyn TokenStore) -> Option<User> {
    let token = store.get()?;
    let claims = claims::decode(&token)?;
    if claims.is_expired(chrono::Utc::now().timestamp()) {
        store.remove();
        return None;
    }
    Some(claims.into_user())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryTokenStore;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;

    fn token_with(payload: serde_json::Value) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload.to_string()))
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    #[test]
    fn expired_token_reads_as_logged_out_and_is_removed() {
        let store = MemoryTokenStore::with_token(&token_with(json!({
            "sub": "alice",
            "id": 1,
            "email": "a@x.com",
            "exp": now() - 10
        })));

        assert!(read_session(&store).is_none());
        // The read evicted the stale token
        assert_eq!(store.get(), None);
    }

    #[test]
    fn valid_token_yields_session_matching_claims() {
        let store = MemoryTokenStore::with_token(&token_with(json!({
            "sub": "alice",
            "id": 1,
            "email": "a@x.com",
            "fullName": "Alice",
            "exp": now() + 3600
        })));

        let user = read_session(&store).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.full_name.as_deref(), Some("Alice"));
        // A successful read leaves the token alone
        assert!(store.get().is_some());
    }

    #[test]
    fn malformed_token_reads_as_logged_out_without_eviction() {
        let store = MemoryTokenStore::with_token("not-a-token");
        assert!(read_session(&store).is_none());
        assert!(store.get().is_some());
    }

    #[test]
    fn empty_store_reads_as_logged_out() {
        let store = MemoryTokenStore::default();
        assert!(read_session(&store).is_none());
    }

    #[test]
    fn logout_then_current_user_is_none_and_idempotent() {
        let runtime = create_runtime();

        let store: Rc<dyn TokenStore> = Rc::new(MemoryTokenStore::with_token(&token_with(json!({
            "sub": "alice",
            "id": 1,
            "email": "a@x.com",
            "exp": now() + 3600
        }))));
        let api = Api::new(store.clone());
        let state = AuthState {
            user: create_rw_signal(read_session(store.as_ref())),
            store,
            api,
        };
        assert!(state.user.get_untracked().is_some());

        state.logout();
        assert!(state.current_user().is_none());
        assert!(state.user.get_untracked().is_none());

        // A second logout changes nothing
        state.logout();
        assert!(state.current_user().is_none());

        runtime.dispose();
    }

    #[test]
    fn removal_then_read_is_logged_out_from_any_prior_state() {
        let store = MemoryTokenStore::with_token(&token_with(json!({
            "sub": "alice",
            "id": 1,
            "email": "a@x.com",
            "exp": now() + 3600
        })));
        assert!(read_session(&store).is_some());

        // What logout() does to the store, twice to check idempotence
        store.remove();
        assert!(read_session(&store).is_none());
        store.remove();
        assert!(read_session(&store).is_none());
    }
}
