//! Bearer token issuance.
//!
//! Tokens are a reversible base64 encoding of the email and the issuance
//! time in milliseconds. This is deliberately not cryptographically secure;
//! the fixture only needs tokens that are opaque to clients, and collisions
//! across rapid calls are accepted.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;

/// Issue a fresh token for an email address.
#[must_use]
pub fn issue(email: &str) -> String {
    STANDARD.encode(format!("{email}:{}", Utc::now().timestamp_millis()))
}

/// Decode a token back into its email and issuance timestamp.
///
/// Returns `None` for anything that is not a well-formed issued token.
/// Used for diagnostics and tests; the auth gate matches tokens by exact
/// equality and never decodes them.
#[must_use]
pub fn decode(token: &str) -> Option<(String, i64)> {
    let raw = STANDARD.decode(token).ok()?;
    let raw = String::from_utf8(raw).ok()?;
    // The timestamp never contains a colon, the email may.
    let (email, millis) = raw.rsplit_once(':')?;
    Some((email.to_owned(), millis.parse().ok()?))
}
