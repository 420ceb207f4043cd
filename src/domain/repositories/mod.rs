//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ShortUrlRepository`] - Short URL records and their visit history
//!
//! # Testing
//!
//! See integration tests in `tests/repository_short_url.rs` for usage examples.

pub mod short_url_repository;

pub use short_url_repository::{ShortUrlRepository, ShortUrlSummary};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
