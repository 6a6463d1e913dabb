//! Like operations.

use super::{into_json, send, Api, ApiError};

impl Api {
    pub async fn like(&self, blog_id: i64) -> Result<(), ApiError> {
        send(self.post(&format!("/blogs/{}/likes", blog_id))).await?;
        Ok(())
    }

    pub async fn unlike(&self, blog_id: i64) -> Result<(), ApiError> {
        send(self.delete(&format!("/blogs/{}/likes", blog_id))).await?;
        Ok(())
    }

    pub async fn like_count(&self, blog_id: i64) -> Result<u64, ApiError> {
        let response = send(self.get(&format!("/blogs/{}/likes/count", blog_id))).await?;
        into_json(response).await
    }

    /// Whether the calling user has liked this post.
    pub async fn is_liked(&self, blog_id: i64) -> Result<bool, ApiError> {
        let response = send(self.get(&format!("/blogs/{}/likes/is-liked", blog_id))).await?;
        into_json(response).await
    }
}
