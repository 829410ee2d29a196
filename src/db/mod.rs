// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod comment_repository;
#[cfg(test)]
pub mod memory;
pub mod photo_repository;
pub mod store;

pub use comment_repository::*;
#[cfg(test)]
pub use memory::*;
pub use photo_repository::*;
pub use store::*;
