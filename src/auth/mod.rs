//! Authenticated Session
//!
//! Derives the current identity from the credential token in browser
//! storage. The store is created once at startup and injected into both
//! the session manager and the API client; nothing else touches storage.

pub mod claims;
pub mod session;
pub mod store;

pub use session::{provide_auth, read_session, AuthState};
pub use store::{BrowserTokenStore, MemoryTokenStore, TokenStore};
