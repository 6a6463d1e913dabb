//! Resource DTOs
//!
//! Plain records mirroring server response shapes. The client performs no
//! validation or transformation beyond optional-field defaults.

use serde::{Deserialize, Serialize};

/// User identity as the server reports it (token claims encode the same
/// fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    /// Name to show in cards and menus; falls back to the username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// A post in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: User,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
}

/// Payload for creating or updating a post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author_username: Option<String>,
    pub created_at: String,
}

/// A comment as listed under `/users/me/comments`, carrying its post id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComment {
    pub id: i64,
    pub content: String,
    pub author_username: String,
    pub created_at: String,
    pub blog_id: i64,
}

/// Public view of a user profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl PublicProfile {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// One page of a paginated listing. `number` is zero-based on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
}

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Profile fields the owner can change via `PUT /users/me`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub bio: String,
    pub profile_picture: String,
}

/// Server response to login and register.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    /// Issued by the server but unused: no token-renewal flow exists.
    #[serde(default)]
    pub refresh_token: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl AuthResponse {
    /// The profile fields of the response, as the session identity.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            full_name: Some(self.full_name),
            profile_picture: self.profile_picture,
            bio: self.bio,
        }
    }
}

/// `{ data, message, status }` wrapper some write endpoints answer with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_maps_to_user() {
        let json = r#"{
            "token": "abc.def.ghi",
            "refreshToken": "r-123",
            "id": 7,
            "username": "alice",
            "email": "a@x.com",
            "fullName": "Alice",
            "profilePicture": null
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.refresh_token, "r-123");

        let user = response.into_user();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
        assert_eq!(user.full_name.as_deref(), Some("Alice"));
        assert_eq!(user.profile_picture, None);
    }

    #[test]
    fn blog_optionals_default() {
        let json = r#"{
            "id": 1,
            "title": "Hello",
            "content": "First post #intro",
            "author": { "id": 7, "username": "alice", "email": "a@x.com" },
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }"#;

        let blog: Blog = serde_json::from_str(json).unwrap();
        assert_eq!(blog.image_url, None);
        assert_eq!(blog.like_count, None);
        assert_eq!(blog.hashtags, None);
        assert_eq!(blog.author.display_name(), "alice");
    }

    #[test]
    fn paginated_page_of_blogs() {
        let json = r#"{
            "content": [],
            "totalElements": 41,
            "totalPages": 3,
            "size": 20,
            "number": 0
        }"#;

        let page: Paginated<Blog> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 0);
        assert!(page.content.is_empty());
    }

    #[test]
    fn display_name_skips_empty_full_name() {
        let user = User {
            id: 1,
            username: "bob".to_string(),
            email: "b@x.com".to_string(),
            full_name: Some(String::new()),
            profile_picture: None,
            bio: None,
        };
        assert_eq!(user.display_name(), "bob");
    }
}
