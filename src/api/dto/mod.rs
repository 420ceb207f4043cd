//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request DTOs are checked with
//! `validator` through [`crate::api::extract::ValidatedJson`].

pub mod analytics;
pub mod health;
pub mod shorten;
