//! Shared types and utilities for the gratitude board client and its tests.

pub mod error;
pub mod hashtags;
pub mod models;

pub use error::*;
pub use hashtags::*;
pub use models::*;
