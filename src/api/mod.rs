//! API Gateway Client
//!
//! Typed operations for the Ripple REST API, one per server
//! resource-action pair. A single `Api` client is built at startup and
//! shared through context; every request computes its Authorization
//! header from the injected token store at call time, so there is no
//! shared mutable header state to keep in sync on login/logout.

mod auth;
mod blogs;
mod comments;
mod error;
mod likes;
pub mod types;
mod users;

pub use error::ApiError;

use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::TokenStore;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Storage key for the API base URL override
const API_URL_KEY: &str = "ripple_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// Gateway to the Ripple REST API.
///
/// Cheap to clone. The base URL is fixed at construction; the token store
/// is the same one the session manager writes to, so a login is visible
/// to the very next request.
#[derive(Clone)]
pub struct Api {
    base: String,
    store: Rc<dyn TokenStore>,
}

impl Api {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            base: get_api_base(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored.
    /// Requests without one proceed bare; the server rejects what it must.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get() {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::delete(&self.url(path)))
    }
}

/// Body shape the server uses for error responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Send a bodyless request and check the status.
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

/// Send a request with a JSON body and check the status.
async fn send_json<B: Serialize>(
    request: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let response = request
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

/// Map non-success statuses to the error taxonomy, pulling the server's
/// message out of the body when it sent one.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    let fallback = format!("request failed with status {}", response.status());
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or(fallback);
    Err(ApiError::Server(message))
}

/// Decode a checked response body.
async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
