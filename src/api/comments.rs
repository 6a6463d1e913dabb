//! Comment operations.

use serde::Serialize;

use super::types::Comment;
use super::{into_json, send, send_json, Api, ApiError};

/// `{ content }` body for adding and editing comments.
#[derive(Serialize)]
struct CommentInput<'a> {
    content: &'a str,
}

impl Api {
    pub async fn comments(&self, blog_id: i64) -> Result<Vec<Comment>, ApiError> {
        let response = send(self.get(&format!("/blogs/{}/comments", blog_id))).await?;
        into_json(response).await
    }

    pub async fn add_comment(&self, blog_id: i64, content: &str) -> Result<Comment, ApiError> {
        let response = send_json(
            self.post(&format!("/blogs/{}/comments", blog_id)),
            &CommentInput { content },
        )
        .await?;
        into_json(response).await
    }

    pub async fn update_comment(
        &self,
        blog_id: i64,
        comment_id: i64,
        content: &str,
    ) -> Result<Comment, ApiError> {
        let response = send_json(
            self.put(&format!("/blogs/{}/comments/{}", blog_id, comment_id)),
            &CommentInput { content },
        )
        .await?;
        into_json(response).await
    }

    pub async fn delete_comment(&self, blog_id: i64, comment_id: i64) -> Result<(), ApiError> {
        send(self.delete(&format!("/blogs/{}/comments/{}", blog_id, comment_id))).await?;
        Ok(())
    }
}
