//! Token manager: construction, issuance, and verification.
//!
//! A [`TokenManager`] binds one secret key to one signing method for its
//! whole lifetime. All fields are fixed at build time, so a single instance
//! is safe to share across threads without synchronization.

use crate::error::TokenError;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use zeroize::Zeroizing;

/// Authorization scheme expected in front of the compact token.
const SCHEME: &str = "bearer";

/// HMAC signing method bound to a [`TokenManager`].
///
/// The manager's key is a shared secret byte string, so only the HMAC
/// family applies; exactly one method covers both signing and
/// verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningMethod {
    /// HMAC with SHA-256 (default).
    #[default]
    HS256,
    /// HMAC with SHA-384.
    HS384,
    /// HMAC with SHA-512.
    HS512,
}

impl SigningMethod {
    /// Method name as it appears in the JWT header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }

    const fn algorithm(self) -> Algorithm {
        match self {
            Self::HS256 => Algorithm::HS256,
            Self::HS384 => Algorithm::HS384,
            Self::HS512 => Algorithm::HS512,
        }
    }
}

/// Issues and verifies bearer JWTs under one key and signing method.
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    method: SigningMethod,
    validation: Validation,
}

impl std::fmt::Debug for TokenManager {
    // Key material never appears in debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TokenManager`].
///
/// Options are plain field assignments; when the same option is given
/// twice, the later call wins. `secret_key` is required and must be
/// non-empty.
#[derive(Default)]
pub struct TokenManagerBuilder {
    key: Option<Zeroizing<Vec<u8>>>,
    method: SigningMethod,
}

impl TokenManagerBuilder {
    /// Set the shared secret used for signing and verification.
    #[must_use]
    pub fn secret_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.key = Some(Zeroizing::new(key.as_ref().to_vec()));
        self
    }

    /// Override the default [`SigningMethod::HS256`].
    #[must_use]
    pub fn signing_method(mut self, method: SigningMethod) -> Self {
        self.method = method;
        self
    }

    /// Freeze the configuration into an immutable [`TokenManager`].
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Configuration`] when no non-empty secret key
    /// was supplied.
    pub fn build(self) -> Result<TokenManager, TokenError> {
        let key = self.key.filter(|k| !k.is_empty()).ok_or(TokenError::Configuration {
            reason: "secret key must be set",
        })?;

        let mut validation = Validation::new(self.method.algorithm());
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Claims are caller-defined; nothing is required to be present and
        // audience checking is out of scope.
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        // Only the derived keys survive; the raw secret is zeroized on drop.
        Ok(TokenManager {
            encoding_key: EncodingKey::from_secret(&key),
            decoding_key: DecodingKey::from_secret(&key),
            method: self.method,
            validation,
        })
    }
}

impl TokenManager {
    /// Start building a manager.
    #[must_use]
    pub fn builder() -> TokenManagerBuilder {
        TokenManagerBuilder::default()
    }

    /// The signing method bound to this manager.
    #[must_use]
    pub const fn signing_method(&self) -> SigningMethod {
        self.method
    }

    /// Sign `claims` into a compact `header.payload.signature` token.
    ///
    /// The result carries no scheme prefix; the transport layer adds
    /// `"Bearer "` when placing it in an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] when the claims cannot be serialized
    /// or the cryptographic layer rejects the operation.
    pub fn create_with_claims<C>(&self, claims: &C) -> Result<String, TokenError>
    where
        C: Serialize,
    {
        let header = Header::new(self.method.algorithm());

        let token = jsonwebtoken::encode(&header, claims, &self.encoding_key)
            .map_err(|source| TokenError::Signing { source })?;

        debug!(method = self.method.as_str(), "issued token");
        Ok(token)
    }

    /// Verify a `"Bearer <token>"` credential string and fill `claims`
    /// with the decoded payload.
    ///
    /// Checks run in order: scheme framing, scheme text, then signature
    /// verification, then time-bound claim restrictions. Restrictions are
    /// only evaluated on signature-valid tokens; unverified claims are
    /// never trusted for time-based decisions.
    ///
    /// On failure `claims` must not be relied upon; on success it is
    /// overwritten with the decoded payload.
    ///
    /// # Errors
    ///
    /// - [`TokenError::InvalidToken`]: no scheme separator, or the compact
    ///   token is structurally bad.
    /// - [`TokenError::InvalidScheme`]: scheme text is not `bearer`
    ///   (compared case-insensitively).
    /// - [`TokenError::InvalidSignature`]: signature does not verify.
    /// - [`TokenError::Restriction`]: token is expired or not yet valid.
    pub fn parse_with_claims<C>(&self, raw: &str, claims: &mut C) -> Result<(), TokenError>
    where
        C: DeserializeOwned,
    {
        let (scheme, token) = raw.split_once(' ').ok_or(TokenError::InvalidToken {
            reason: "missing scheme separator",
            source: None,
        })?;

        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return Err(TokenError::InvalidScheme);
        }

        let data = jsonwebtoken::decode::<C>(token, &self.decoding_key, &self.validation)
            .map_err(|err| {
                let err = TokenError::from_verification(err);
                debug!(kind = err.kind().as_str(), "rejected token");
                err
            })?;

        *claims = data.claims;
        Ok(())
    }
}
