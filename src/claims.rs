//! Convenience claims payload with registered and custom fields.
//!
//! The manager accepts any `Serialize`/`DeserializeOwned` payload; this
//! type is a ready-made one covering the registered temporal fields plus a
//! flattened map of application-defined claims.

use crate::time;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JWT claims: optional registered fields plus caller-defined extras.
///
/// Temporal fields (`exp`, `nbf`, `iat`) are numeric seconds since the
/// Unix epoch; absent fields are omitted from the payload entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Issuer (`iss`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Subject (`sub`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration time (`exp`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not-before time (`nbf`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Issued-at time (`iat`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Token identifier (`jti`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Application-defined claims.
    #[serde(flatten)]
    pub custom: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Empty claims with `iat` set to now.
    #[must_use]
    pub fn new() -> Self {
        Claims {
            iat: Some(time::now()),
            ..Claims::default()
        }
    }

    /// Set the subject.
    #[must_use]
    pub fn with_subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer.
    #[must_use]
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Expire the token `lifetime` from now.
    #[must_use]
    pub fn with_expires_in(mut self, lifetime: chrono::Duration) -> Self {
        self.exp = Some(time::expires_in(lifetime));
        self
    }

    /// Set an absolute expiration timestamp.
    #[must_use]
    pub fn with_expires_at(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Make the token invalid before `offset` from now.
    #[must_use]
    pub fn with_not_before_in(mut self, offset: chrono::Duration) -> Self {
        self.nbf = Some(time::expires_in(offset));
        self
    }

    /// Add an application-defined claim.
    #[must_use]
    pub fn with_custom_claim(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }

    /// Whether `exp` is present and in the past.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(|exp| exp < time::now())
    }

    /// Whether the token's time window covers `timestamp`.
    #[must_use]
    pub fn is_valid_at(&self, timestamp: i64) -> bool {
        if self.nbf.is_some_and(|nbf| timestamp < nbf) {
            return false;
        }
        self.exp.map_or(true, |exp| timestamp < exp)
    }
}
