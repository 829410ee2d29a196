// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod comment_service;
pub mod photo_service;

pub use comment_service::CommentService;
pub use photo_service::PhotoService;
