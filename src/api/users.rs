//! User and follow-graph operations.

use super::types::{Blog, ProfileUpdate, PublicProfile, User, UserComment};
use super::{into_json, send, send_json, Api, ApiError};

impl Api {
    pub async fn update_profile(&self, profile: &ProfileUpdate) -> Result<User, ApiError> {
        let response = send_json(self.put("/users/me"), profile).await?;
        into_json(response).await
    }

    pub async fn liked_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        let response = send(self.get("/users/me/likes")).await?;
        into_json(response).await
    }

    pub async fn my_comments(&self) -> Result<Vec<UserComment>, ApiError> {
        let response = send(self.get("/users/me/comments")).await?;
        into_json(response).await
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, ApiError> {
        let response = send(self.get(&format!(
            "/users/search?q={}",
            urlencoding::encode(query)
        )))
        .await?;
        into_json(response).await
    }

    pub async fn follow(&self, username: &str) -> Result<(), ApiError> {
        send(self.post(&format!("/users/{}/follow", urlencoding::encode(username)))).await?;
        Ok(())
    }

    pub async fn unfollow(&self, username: &str) -> Result<(), ApiError> {
        send(self.post(&format!("/users/{}/unfollow", urlencoding::encode(username)))).await?;
        Ok(())
    }

    pub async fn followers_count(&self, username: &str) -> Result<u64, ApiError> {
        let response = send(self.get(&format!(
            "/users/{}/followers/count",
            urlencoding::encode(username)
        )))
        .await?;
        into_json(response).await
    }

    pub async fn following_count(&self, username: &str) -> Result<u64, ApiError> {
        let response = send(self.get(&format!(
            "/users/{}/following/count",
            urlencoding::encode(username)
        )))
        .await?;
        into_json(response).await
    }

    pub async fn followers(&self, username: &str) -> Result<Vec<PublicProfile>, ApiError> {
        let response = send(self.get(&format!(
            "/users/{}/followers",
            urlencoding::encode(username)
        )))
        .await?;
        into_json(response).await
    }

    pub async fn following(&self, username: &str) -> Result<Vec<PublicProfile>, ApiError> {
        let response = send(self.get(&format!(
            "/users/{}/following",
            urlencoding::encode(username)
        )))
        .await?;
        into_json(response).await
    }

    /// Whether the calling user follows `username`.
    pub async fn is_following(&self, username: &str) -> Result<bool, ApiError> {
        let response = send(self.get(&format!(
            "/users/{}/is-following",
            urlencoding::encode(username)
        )))
        .await?;
        into_json(response).await
    }

    pub async fn public_profile(&self, username: &str) -> Result<PublicProfile, ApiError> {
        let response = send(self.get(&format!(
            "/users/public/{}",
            urlencoding::encode(username)
        )))
        .await?;
        into_json(response).await
    }
}
