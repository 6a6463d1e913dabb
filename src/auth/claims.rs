//! Credential Token Claims
//!
//! The token is an opaque signed string of the form
//! `header.payload.signature`; only the payload segment is decoded here
//! (base64url, no padding, JSON). The signature is never checked
//! client-side - trust is delegated to the issuing server.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::api::types::User;

/// Claims embedded in the credential token payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject - set to the username.
    pub sub: String,
    /// Numeric user id.
    pub id: i64,
    pub email: String,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

impl Claims {
    /// True when the expiry is at or before `now` (Unix seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// The identity these claims describe.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.sub,
            email: self.email,
            full_name: self.full_name,
            profile_picture: self.profile_picture,
            bio: self.bio,
        }
    }
}

/// Decode the payload segment of `token`.
///
/// Anything that is not `<..>.<base64url json claims>.<..>` answers `None`.
pub fn decode(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Build a structurally valid token around `payload`.
    fn token_with(payload: serde_json::Value) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload.to_string()))
    }

    #[test]
    fn decodes_well_formed_payload() {
        let token = token_with(json!({
            "sub": "alice",
            "id": 1,
            "email": "a@x.com",
            "fullName": "Alice",
            "exp": 4_102_444_800i64
        }));

        let claims = decode(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.id, 1);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.full_name.as_deref(), Some("Alice"));
        assert_eq!(claims.bio, None);
    }

    #[test]
    fn optional_claims_default() {
        let token = token_with(json!({
            "sub": "bob",
            "id": 2,
            "email": "b@x.com",
            "exp": 4_102_444_800i64
        }));

        let user = decode(&token).unwrap().into_user();
        assert_eq!(user.username, "bob");
        assert_eq!(user.full_name, None);
        assert_eq!(user.profile_picture, None);
    }

    #[test]
    fn rejects_malformed_tokens() {
        // No payload segment
        assert!(decode("justonechunk").is_none());
        // Payload is not base64url
        assert!(decode("header.!!!.signature").is_none());
        // Payload decodes but is not JSON
        let garbage = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert!(decode(&garbage).is_none());
        // Payload is JSON but missing required claims
        let partial = token_with(json!({ "sub": "alice" }));
        assert!(decode(&partial).is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let claims = decode(&token_with(json!({
            "sub": "alice",
            "id": 1,
            "email": "a@x.com",
            "exp": 1000
        })))
        .unwrap();

        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
        assert!(!claims.is_expired(999));
    }
}
