// src/services/comment_service.rs
// DOCUMENTATION: Business logic for comments
// PURPOSE: Validate-then-save for new comments

use crate::db::CommentStore;
use crate::errors::ApiError;
use crate::models::{Comment, NewComment, Validated, ValidationErrors};
use validator::Validate;

pub struct CommentService;

impl CommentService {
    /// Create a comment
    /// DOCUMENTATION: Validation runs first; nothing is written for an
    /// invalid comment
    pub async fn create(
        store: &dyn CommentStore,
        comment: NewComment,
    ) -> Result<Validated<Comment>, ApiError> {
        if let Err(e) = comment.validate() {
            log::info!("Comment rejected by validation");
            return Ok(Err(ValidationErrors::of::<NewComment>(e)));
        }

        let saved = store.insert(&comment).await?;
        log::info!("Comment {} created on photo {:?}", saved.id, saved.photo_id);
        Ok(Ok(saved))
    }
}
