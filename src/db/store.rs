// src/db/store.rs
// DOCUMENTATION: Narrow persistence interfaces
// PURPOSE: Let services run against PostgreSQL or an in-memory store

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{Comment, NewComment, Photo};

/// Read and update access to the photos table.
///
/// Implementations do not validate; callers gate writes on validation.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Every photo, ordered by id.
    async fn list(&self) -> Result<Vec<Photo>, ApiError>;

    /// Look up a photo. Returns `None` if no row has this id.
    async fn find(&self, id: i64) -> Result<Option<Photo>, ApiError>;

    /// Persist title and photo_url_string of an existing photo.
    async fn update(&self, photo: &Photo) -> Result<Photo, ApiError>;
}

/// Insert-only access to the comments table.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Insert a comment, assigning id and timestamps.
    async fn insert(&self, comment: &NewComment) -> Result<Comment, ApiError>;
}
