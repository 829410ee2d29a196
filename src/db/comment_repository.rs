// src/db/comment_repository.rs
// DOCUMENTATION: Comment database operations
// PURPOSE: PostgreSQL implementation of CommentStore

use crate::db::CommentStore;
use crate::errors::ApiError;
use crate::models::{Comment, NewComment};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentRepository {
    /// Create a new comment
    /// DOCUMENTATION: No existence check on photo_id; the column is a plain integer
    async fn insert(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (content, owner, photo_id, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, content, owner, photo_id, created_at, updated_at
            "#,
        )
        .bind(&comment.content)
        .bind(&comment.owner)
        .bind(comment.photo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create comment: {}", e);
            ApiError::DatabaseError(format!("Create comment failed: {}", e))
        })
    }
}
