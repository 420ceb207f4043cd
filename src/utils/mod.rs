//! Utility functions shared across layers.
//!
//! - [`location`] - `Location` header encoding
//! - [`short_id`] - Random short identifier generation

pub mod location;
pub mod short_id;
