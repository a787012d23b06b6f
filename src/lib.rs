//! Bearer-scheme JWT issuance and verification.
//!
//! A [`TokenManager`] is built once with a secret key and a signing method,
//! then shared read-only across callers. It signs caller-defined claims into
//! compact JWTs and verifies `"Bearer <token>"` credential strings, reporting
//! failures through a classified [`TokenError`] taxonomy so consumers can
//! branch on category rather than message text.
//!
//! ```no_run
//! use bearer_jwt::{Claims, TokenManager};
//!
//! # fn main() -> Result<(), bearer_jwt::TokenError> {
//! let manager = TokenManager::builder()
//!     .secret_key(b"secret")
//!     .build()?;
//!
//! let claims = Claims::new()
//!     .with_subject("123")
//!     .with_expires_in(chrono::Duration::minutes(15));
//!
//! let token = manager.create_with_claims(&claims)?;
//!
//! let mut decoded = Claims::default();
//! manager.parse_with_claims(&format!("Bearer {token}"), &mut decoded)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod claims;
pub mod error;
pub mod manager;
pub mod time;

// Re-exports for convenience
pub use claims::Claims;
pub use error::{TokenError, TokenErrorKind};
pub use manager::{SigningMethod, TokenManager, TokenManagerBuilder};
