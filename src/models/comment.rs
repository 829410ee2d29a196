// src/models/comment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::AttributeOrder;

/// Persisted comment (comments table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: Option<String>,
    pub owner: Option<String>,
    pub photo_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unpersisted comment built from whitelisted parameters
/// DOCUMENTATION: photo_id is not checked against the photos table
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct NewComment {
    #[validate(required, length(min = 1))]
    pub content: Option<String>,

    #[validate(required, length(min = 1, max = 255))]
    pub owner: Option<String>,

    #[validate(required)]
    pub photo_id: Option<i32>,
}

impl AttributeOrder for NewComment {
    const ATTRIBUTES: &'static [&'static str] = &["content", "owner", "photo_id"];
}
