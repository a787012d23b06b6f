//! Property-based tests for the token manager.
//!
//! Property 1: issue/parse round-trip consistency
//! Property 2: tamper detection on the signature segment
//! Property 3: scheme handling (case-insensitive accept, strict reject)

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bearer_jwt::{TokenErrorKind, TokenManager};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct TestClaims {
    #[serde(default)]
    sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
    #[serde(default)]
    custom_field: String,
}

/// Generate arbitrary non-empty signing keys.
fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..64)
}

/// Generate arbitrary subject strings.
fn arb_subject() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,64}"
}

/// Generate arbitrary custom claim values.
fn arb_custom() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,32}"
}

/// Generate arbitrary TTLs (1 minute to 24 hours).
fn arb_ttl() -> impl Strategy<Value = i64> {
    60i64..86_400i64
}

fn manager(key: &[u8]) -> TokenManager {
    TokenManager::builder().secret_key(key).build().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any key and claims with a live expiry, parsing the freshly
    /// issued token recovers the claims field-by-field.
    #[test]
    fn prop_round_trip_consistency(
        key in arb_key(),
        sub in arb_subject(),
        custom in arb_custom(),
        ttl in arb_ttl(),
    ) {
        let tm = manager(&key);
        let issued = TestClaims {
            sub,
            exp: Some(chrono::Utc::now().timestamp() + ttl),
            custom_field: custom,
        };

        let token = tm.create_with_claims(&issued).unwrap();
        let mut parsed = TestClaims::default();
        tm.parse_with_claims(&format!("Bearer {token}"), &mut parsed).unwrap();

        prop_assert_eq!(issued, parsed);
    }

    /// Flipping any bit of the signature segment must yield a signature
    /// failure, never success and never a different category.
    #[test]
    fn prop_tampered_signature_is_rejected(
        key in arb_key(),
        sub in arb_subject(),
        byte_index in 0usize..32,
        bit in 0u8..8,
    ) {
        let tm = manager(&key);
        let issued = TestClaims {
            sub,
            exp: Some(chrono::Utc::now().timestamp() + 3600),
            custom_field: String::new(),
        };

        let token = tm.create_with_claims(&issued).unwrap();
        let (head, sig_b64) = token.rsplit_once('.').unwrap();

        // HS256 signatures are 32 bytes
        let mut sig = URL_SAFE_NO_PAD.decode(sig_b64).unwrap();
        prop_assert_eq!(sig.len(), 32);
        sig[byte_index] ^= 1 << bit;
        let tampered = format!("{head}.{}", URL_SAFE_NO_PAD.encode(&sig));

        let mut parsed = TestClaims::default();
        let err = tm
            .parse_with_claims(&format!("Bearer {tampered}"), &mut parsed)
            .unwrap_err();
        prop_assert_eq!(err.kind(), TokenErrorKind::InvalidSignature);
    }

    /// Verifying under a different key fails with a signature error.
    #[test]
    fn prop_wrong_key_is_rejected(
        key in arb_key(),
        other_key in arb_key(),
        sub in arb_subject(),
    ) {
        prop_assume!(key != other_key);

        let issued = TestClaims {
            sub,
            exp: Some(chrono::Utc::now().timestamp() + 3600),
            custom_field: String::new(),
        };
        let token = manager(&key).create_with_claims(&issued).unwrap();

        let mut parsed = TestClaims::default();
        let err = manager(&other_key)
            .parse_with_claims(&format!("Bearer {token}"), &mut parsed)
            .unwrap_err();
        prop_assert_eq!(err.kind(), TokenErrorKind::InvalidSignature);
    }

    /// Any casing of the literal `bearer` is accepted at the scheme check.
    #[test]
    fn prop_scheme_is_case_insensitive(
        key in arb_key(),
        sub in arb_subject(),
        upper in prop::collection::vec(any::<bool>(), 6),
    ) {
        let scheme: String = "bearer"
            .chars()
            .zip(&upper)
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();

        let tm = manager(&key);
        let issued = TestClaims {
            sub,
            exp: Some(chrono::Utc::now().timestamp() + 3600),
            custom_field: String::new(),
        };
        let token = tm.create_with_claims(&issued).unwrap();

        let mut parsed = TestClaims::default();
        tm.parse_with_claims(&format!("{scheme} {token}"), &mut parsed).unwrap();
        prop_assert_eq!(issued, parsed);
    }

    /// Any scheme text other than `bearer` is rejected as a scheme error
    /// before the compact token is even looked at.
    #[test]
    fn prop_foreign_scheme_is_rejected(
        key in arb_key(),
        scheme in "[a-zA-Z0-9]{1,12}",
    ) {
        prop_assume!(!scheme.eq_ignore_ascii_case("bearer"));

        let tm = manager(&key);
        let mut parsed = TestClaims::default();
        let err = tm
            .parse_with_claims(&format!("{scheme} not.even.a-token"), &mut parsed)
            .unwrap_err();
        prop_assert_eq!(err.kind(), TokenErrorKind::InvalidScheme);
    }
}
