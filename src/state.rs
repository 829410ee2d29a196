// src/state.rs
// DOCUMENTATION: Shared application state
// PURPOSE: Stores handed to every request through web::Data

use std::sync::Arc;

use crate::db::{CommentStore, PhotoStore};

#[derive(Clone)]
pub struct AppState {
    pub photos: Arc<dyn PhotoStore>,
    pub comments: Arc<dyn CommentStore>,
}

impl AppState {
    pub fn new(photos: Arc<dyn PhotoStore>, comments: Arc<dyn CommentStore>) -> Self {
        Self { photos, comments }
    }
}
