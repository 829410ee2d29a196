// src/services/photo_service.rs
// DOCUMENTATION: Business logic for photos
// PURPOSE: Intermediary between handlers and the photo store

use crate::db::PhotoStore;
use crate::errors::ApiError;
use crate::models::{Photo, PhotoChanges, Validated, ValidationErrors};
use validator::Validate;

pub struct PhotoService;

impl PhotoService {
    /// All photos
    pub async fn list(store: &dyn PhotoStore) -> Result<Vec<Photo>, ApiError> {
        store.list().await
    }

    /// Locate a photo or fail with NotFound
    /// DOCUMENTATION: Runs before show and update
    pub async fn find(store: &dyn PhotoStore, id: i64) -> Result<Photo, ApiError> {
        store.find(id).await?.ok_or_else(|| {
            log::info!("Photo {} not found", id);
            ApiError::NotFound(format!("Couldn't find Photo with 'id'={}", id))
        })
    }

    /// Apply whitelisted changes to a located photo, validate, then persist
    /// DOCUMENTATION: An invalid photo is not written; its rule violations
    /// come back as the inner `Err`
    pub async fn update(
        store: &dyn PhotoStore,
        mut photo: Photo,
        changes: PhotoChanges,
    ) -> Result<Validated<Photo>, ApiError> {
        changes.apply_to(&mut photo);

        if let Err(e) = photo.validate() {
            log::info!("Photo {} update rejected by validation", photo.id);
            return Ok(Err(ValidationErrors::of::<Photo>(e)));
        }

        let saved = store.update(&photo).await?;
        log::info!("Photo {} updated", saved.id);
        Ok(Ok(saved))
    }
}
