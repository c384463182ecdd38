//! Tests for the identity-provider claim helpers. Signature validation goes
//! through the live JWKS endpoint, so these cover the claim-shape handling
//! that is ours: name fallbacks, optional fields, and the external user ID.

use opsboard_backend::auth::jwt::Claims;

fn claims_from(json: serde_json::Value) -> Claims {
    serde_json::from_value(json).expect("claims should deserialize")
}

#[test]
fn full_claims_deserialize() {
    let claims = claims_from(serde_json::json!({
        "sub": "user_2apXr9mNkQ",
        "exp": 2_000_000_000usize,
        "iat": 1_900_000_000usize,
        "iss": "https://example.clerk.accounts.dev",
        "azp": "https://dashboard.example.com",
        "email": "ops@example.com",
        "name": "Ops Admin"
    }));

    assert_eq!(claims.clerk_id(), "user_2apXr9mNkQ");
    assert_eq!(claims.user_email().as_deref(), Some("ops@example.com"));
    assert_eq!(claims.display_name().as_deref(), Some("Ops Admin"));
}

#[test]
fn minimal_claims_deserialize_without_optional_fields() {
    let claims = claims_from(serde_json::json!({
        "sub": "user_minimal",
        "exp": 2_000_000_000usize
    }));

    assert_eq!(claims.clerk_id(), "user_minimal");
    assert!(claims.user_email().is_none());
    assert!(claims.display_name().is_none());
}

#[test]
fn display_name_falls_back_to_first_and_last() {
    let claims = claims_from(serde_json::json!({
        "sub": "user_split_name",
        "exp": 2_000_000_000usize,
        "first_name": "Ada",
        "last_name": "Lovelace"
    }));
    assert_eq!(claims.display_name().as_deref(), Some("Ada Lovelace"));

    let first_only = claims_from(serde_json::json!({
        "sub": "user_first_only",
        "exp": 2_000_000_000usize,
        "first_name": "Ada"
    }));
    assert_eq!(first_only.display_name().as_deref(), Some("Ada"));
}

#[test]
fn full_name_claim_wins_over_the_parts() {
    let claims = claims_from(serde_json::json!({
        "sub": "user_both",
        "exp": 2_000_000_000usize,
        "name": "A. Lovelace",
        "first_name": "Ada",
        "last_name": "Lovelace"
    }));
    assert_eq!(claims.display_name().as_deref(), Some("A. Lovelace"));
}
