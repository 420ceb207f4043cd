//! Core domain entities.
//!
//! - [`ShortUrl`] - A short identifier mapped to its redirect target
//! - [`Visit`] - One entry in a short URL's visit history
//!
//! Creation input uses a separate struct ([`NewShortUrl`]) so that
//! store-assigned fields never have to be invented by callers.

pub mod short_url;
pub mod visit;

pub use short_url::{NewShortUrl, ShortUrl};
pub use visit::Visit;
