//! Short identifier generation.
//!
//! Identifiers are drawn from OS entropy and encoded as URL-safe base64
//! without padding, so every character is one of `A-Z a-z 0-9 _ -`.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of a generated short identifier in characters.
pub const SHORT_ID_LENGTH: usize = 8;

/// Random bytes per identifier; 6 bytes encode to exactly 8 base64 characters.
const SHORT_ID_BYTES: usize = SHORT_ID_LENGTH / 4 * 3;

/// Generates a random 8-character short identifier.
///
/// Collisions are not checked against the store; with 48 bits of entropy
/// they are negligible at this service's scale.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_short_id() -> Result<String, AppError> {
    let mut buffer = [0u8; SHORT_ID_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate short id",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Returns true if `c` belongs to the short identifier alphabet.
pub fn is_short_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
