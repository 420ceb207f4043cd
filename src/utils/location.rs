//! `Location` header encoding for redirects.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::borrow::Cow;

/// Bytes that cannot appear unescaped in a redirect target.
///
/// Reserved URL characters and `%` are kept, so already-encoded targets
/// pass through unchanged. Non-ASCII is always encoded.
const LOCATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes `url` so that it is always a valid header value.
///
/// Borrows `url` when nothing needs encoding.
pub fn encode_location(url: &str) -> Cow<'_, str> {
    utf8_percent_encode(url, LOCATION).into()
}
