//! Post operations.

use super::types::{ApiEnvelope, Blog, BlogInput, Paginated};
use super::{into_json, send, send_json, Api, ApiError};

impl Api {
    /// Fetch one page of the global feed. `page` is zero-based on the wire.
    pub async fn list_blogs(&self, page: u32, size: u32) -> Result<Paginated<Blog>, ApiError> {
        let response = send(self.get(&format!("/blogs?page={}&size={}", page, size))).await?;
        into_json(response).await
    }

    pub async fn get_blog(&self, id: i64) -> Result<Blog, ApiError> {
        let response = send(self.get(&format!("/blogs/{}", id))).await?;
        into_json(response).await
    }

    /// Create a post. This endpoint wraps its answer in an envelope.
    pub async fn create_blog(&self, blog: &BlogInput) -> Result<Blog, ApiError> {
        let response = send_json(self.post("/blogs"), blog).await?;
        let envelope: ApiEnvelope<Blog> = into_json(response).await?;
        Ok(envelope.data)
    }

    pub async fn update_blog(&self, id: i64, blog: &BlogInput) -> Result<Blog, ApiError> {
        let response = send_json(self.put(&format!("/blogs/{}", id)), blog).await?;
        into_json(response).await
    }

    pub async fn delete_blog(&self, id: i64) -> Result<(), ApiError> {
        send(self.delete(&format!("/blogs/{}", id))).await?;
        Ok(())
    }

    /// All posts by one author, newest first as the server orders them.
    pub async fn blogs_by_user(&self, username: &str) -> Result<Vec<Blog>, ApiError> {
        let response = send(
            self.get(&format!("/blogs/user/{}", urlencoding::encode(username))),
        )
        .await?;
        into_json(response).await
    }

    /// Posts carrying `hashtag`. `page` is zero-based on the wire.
    pub async fn search_by_hashtag(
        &self,
        hashtag: &str,
        page: u32,
        size: u32,
    ) -> Result<Paginated<Blog>, ApiError> {
        let response = send(self.get(&format!(
            "/blogs/search?hashtag={}&page={}&size={}",
            urlencoding::encode(hashtag),
            page,
            size
        )))
        .await?;
        into_json(response).await
    }

    /// Hashtag completions for the search box.
    pub async fn hashtag_suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let response = send(self.get(&format!(
            "/blogs/hashtags?q={}",
            urlencoding::encode(query)
        )))
        .await?;
        into_json(response).await
    }
}
