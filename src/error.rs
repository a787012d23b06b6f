//! Error taxonomy for token issuance and verification.
//!
//! Every failure is a [`TokenError`] variant carrying its underlying cause
//! where one exists. Consumers branch on [`TokenError::kind`], a stable
//! category independent of message text, to map failures to responses
//! (401 vs 500 and the like) outside this crate.

use thiserror::Error;

/// Classified failure raised by construction, issuance, or verification.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TokenError {
    /// Manager construction invariant violated; no manager is produced.
    #[error("configuration error: {reason}")]
    Configuration {
        /// What was missing or invalid.
        reason: &'static str,
    },

    /// Signing failed at the cryptographic layer.
    #[error("token signing failed")]
    Signing {
        /// Underlying cause from the JWT library.
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// Malformed input: missing scheme separator, bad compact-token
    /// structure, or an undecodable segment.
    #[error("malformed token: {reason}")]
    InvalidToken {
        /// Description of the malformation.
        reason: &'static str,
        /// Underlying decode cause, when the JWT library produced one.
        #[source]
        source: Option<jsonwebtoken::errors::Error>,
    },

    /// Scheme token present but not case-insensitively equal to `bearer`.
    #[error("unsupported authorization scheme")]
    InvalidScheme,

    /// Structurally valid token whose signature fails verification.
    #[error("token signature verification failed")]
    InvalidSignature {
        /// Underlying cause from the JWT library.
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// Signature-valid token violating a time-bound restriction
    /// (expired or not yet valid).
    #[error("token restriction violated")]
    Restriction {
        /// Underlying cause from the JWT library.
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}

/// Stable category tags for [`TokenError`], for kind-based matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Construction failure.
    Configuration,
    /// Signing failure.
    Signing,
    /// Malformed input or compact token.
    InvalidToken,
    /// Wrong authorization scheme.
    InvalidScheme,
    /// Signature verification failure.
    InvalidSignature,
    /// Time-bound restriction violation.
    Restriction,
}

impl TokenErrorKind {
    /// String code for logs and API responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "TOKEN_CONFIGURATION",
            Self::Signing => "TOKEN_SIGNING",
            Self::InvalidToken => "TOKEN_INVALID",
            Self::InvalidScheme => "TOKEN_INVALID_SCHEME",
            Self::InvalidSignature => "TOKEN_INVALID_SIGNATURE",
            Self::Restriction => "TOKEN_RESTRICTION",
        }
    }
}

impl TokenError {
    /// The stable category of this error.
    #[must_use]
    pub const fn kind(&self) -> TokenErrorKind {
        match self {
            Self::Configuration { .. } => TokenErrorKind::Configuration,
            Self::Signing { .. } => TokenErrorKind::Signing,
            Self::InvalidToken { .. } => TokenErrorKind::InvalidToken,
            Self::InvalidScheme => TokenErrorKind::InvalidScheme,
            Self::InvalidSignature { .. } => TokenErrorKind::InvalidSignature,
            Self::Restriction { .. } => TokenErrorKind::Restriction,
        }
    }

    /// Classify a verification failure from the JWT library.
    ///
    /// Signature invalidity takes precedence over claim restrictions in the
    /// library itself (signatures are checked before claims), so the mapping
    /// here is one-to-one: time-bound violations become [`Restriction`],
    /// signature mismatches become [`InvalidSignature`], everything else is
    /// a structural [`InvalidToken`].
    ///
    /// [`Restriction`]: TokenError::Restriction
    /// [`InvalidSignature`]: TokenError::InvalidSignature
    /// [`InvalidToken`]: TokenError::InvalidToken
    pub(crate) fn from_verification(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature { source: err },
            ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => {
                Self::Restriction { source: err }
            }
            _ => Self::InvalidToken {
                reason: "compact token rejected",
                source: Some(err),
            },
        }
    }
}
