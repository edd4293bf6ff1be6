//! BullyGuard Core
//!
//! Shared building blocks for the BullyGuard moderation service.
//!
//! This crate provides:
//! - Structured classification types and the normalized verdict
//! - Best-effort parsing of free-text model replies
//! - The versioned instruction template sent to the provider
//! - Error types and result handling

pub mod error;
pub mod prompt;
pub mod reply;
pub mod types;

pub use error::{Error, Result};
pub use reply::parse_reply;
pub use types::{BatchEntry, ClassificationRecord, DashboardSnapshot, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::reply::parse_reply;
    pub use crate::types::{BatchEntry, ClassificationRecord, DashboardSnapshot, Verdict};
}
