//! Time arithmetic for temporal claims.
//!
//! Claim timestamps are numeric seconds since the Unix epoch.

use chrono::Utc;

/// Current time as a claim timestamp.
#[must_use]
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Timestamp `lifetime` from now, suitable for an `exp` or `nbf` claim.
///
/// Negative durations produce timestamps in the past.
#[must_use]
pub fn expires_in(lifetime: chrono::Duration) -> i64 {
    (Utc::now() + lifetime).timestamp()
}
