// src/db/memory.rs
// DOCUMENTATION: In-memory photo and comment store
// PURPOSE: Drive services and handlers in tests without PostgreSQL

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::db::{CommentStore, PhotoStore};
use crate::errors::ApiError;
use crate::models::{Comment, NewComment, Photo};

#[derive(Default)]
pub struct MemoryStore {
    photos: RwLock<BTreeMap<i64, Photo>>,
    comments: RwLock<Vec<Comment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a photo row; photos are created outside the API
    pub async fn insert_photo(&self, title: &str, photo_url_string: &str) -> Photo {
        let mut photos = self.photos.write().await;
        let id = photos.keys().next_back().copied().unwrap_or(0) + 1;
        let photo = Photo {
            id,
            title: Some(title.to_string()),
            photo_url_string: Some(photo_url_string.to_string()),
        };
        photos.insert(id, photo.clone());
        photo
    }

    pub async fn comments(&self) -> Vec<Comment> {
        self.comments.read().await.clone()
    }
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Photo>, ApiError> {
        Ok(self.photos.read().await.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Photo>, ApiError> {
        Ok(self.photos.read().await.get(&id).cloned())
    }

    async fn update(&self, photo: &Photo) -> Result<Photo, ApiError> {
        let mut photos = self.photos.write().await;
        match photos.get_mut(&photo.id) {
            Some(stored) => {
                stored.title = photo.title.clone();
                stored.photo_url_string = photo.photo_url_string.clone();
                Ok(stored.clone())
            }
            None => Err(ApiError::NotFound(format!(
                "Couldn't find Photo with 'id'={}",
                photo.id
            ))),
        }
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        let mut comments = self.comments.write().await;
        let now = Utc::now();
        let stored = Comment {
            id: comments.len() as i64 + 1,
            content: comment.content.clone(),
            owner: comment.owner.clone(),
            photo_id: comment.photo_id,
            created_at: now,
            updated_at: now,
        };
        comments.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_photo_ids_are_sequential() {
        let store = MemoryStore::new();
        let a = store.insert_photo("a", "https://img.example/a.jpg").await;
        let b = store.insert_photo("b", "https://img.example/b.jpg").await;

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.list().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_update_missing_photo() {
        let store = MemoryStore::new();
        let ghost = Photo {
            id: 42,
            title: None,
            photo_url_string: None,
        };

        assert!(matches!(
            store.update(&ghost).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_insert_comment_assigns_id_and_timestamps() {
        let store = MemoryStore::new();
        let comment = store
            .insert(&NewComment {
                content: Some("hi".to_string()),
                owner: Some("alice".to_string()),
                photo_id: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(comment.id, 1);
        assert_eq!(comment.created_at, comment.updated_at);
        assert_eq!(store.comments().await.len(), 1);
    }
}
