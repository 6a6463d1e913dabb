//! Authentication operations.

use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use super::{into_json, send_json, Api, ApiError};

impl Api {
    /// Exchange credentials for a token and the caller's profile.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = send_json(self.post("/auth/login"), credentials).await?;
        into_json(response).await
    }

    /// Create an account; answers with the same shape as login.
    pub async fn register(&self, profile: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = send_json(self.post("/auth/register"), profile).await?;
        into_json(response).await
    }
}
