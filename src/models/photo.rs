// src/models/photo.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::AttributeOrder;

/// Photo record from the photos table
/// DOCUMENTATION: The table is owned outside this service; only title and
/// photo_url_string are ever written here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct Photo {
    pub id: i64,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 2048))]
    pub photo_url_string: Option<String>,
}

impl AttributeOrder for Photo {
    const ATTRIBUTES: &'static [&'static str] = &["title", "photo_url_string"];
}

/// Whitelisted update for a photo
/// Outer `None` leaves the attribute untouched, `Some(None)` clears it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoChanges {
    pub title: Option<Option<String>>,
    pub photo_url_string: Option<Option<String>>,
}

impl PhotoChanges {
    /// Assign the sent attributes onto a located record
    pub fn apply_to(self, photo: &mut Photo) {
        if let Some(title) = self.title {
            photo.title = title;
        }
        if let Some(photo_url_string) = self.photo_url_string {
            photo.photo_url_string = photo_url_string;
        }
    }
}
