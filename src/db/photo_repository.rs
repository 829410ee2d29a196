// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: PostgreSQL implementation of PhotoStore

use crate::db::PhotoStore;
use crate::errors::ApiError;
use crate::models::Photo;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoStore for PhotoRepository {
    /// List all photos
    /// DOCUMENTATION: Unfiltered and unpaginated
    async fn list(&self) -> Result<Vec<Photo>, ApiError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, title, photo_url_string
            FROM photos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list photos: {}", e);
            ApiError::DatabaseError(format!("List photos failed: {}", e))
        })
    }

    async fn find(&self, id: i64) -> Result<Option<Photo>, ApiError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, title, photo_url_string
            FROM photos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch photo {}: {}", id, e);
            ApiError::DatabaseError(format!("Fetch photo failed: {}", e))
        })
    }

    /// Update a photo
    /// DOCUMENTATION: Only the two client-writable columns are touched
    async fn update(&self, photo: &Photo) -> Result<Photo, ApiError> {
        sqlx::query_as::<_, Photo>(
            r#"
            UPDATE photos
            SET title = $2,
                photo_url_string = $3
            WHERE id = $1
            RETURNING id, title, photo_url_string
            "#,
        )
        .bind(photo.id)
        .bind(&photo.title)
        .bind(&photo.photo_url_string)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update photo {}: {}", photo.id, e);
            ApiError::DatabaseError(format!("Update photo failed: {}", e))
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Couldn't find Photo with 'id'={}", photo.id)))
    }
}
