use crate::{AuthError, SessionClaims, SessionIssuer, SessionValidator};

use acct_core::Account;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn valid_claims() -> SessionClaims {
    SessionClaims {
        sub: "b7f9a7f0-0000-4000-8000-000000000001".to_string(),
        username: "QuinnLee7".to_string(),
        linked: true,
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_issued_token_when_validated_then_claims_round_trip() {
    let issuer = SessionIssuer::with_hs256(SECRET);
    let validator = SessionValidator::with_hs256(SECRET);
    let claims = valid_claims();

    let token = issuer.issue(&claims).unwrap();
    let validated = validator.validate(&token).unwrap();

    assert_eq!(validated.sub, claims.sub);
    assert_eq!(validated.username, "QuinnLee7");
    assert!(validated.linked);
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let issuer = SessionIssuer::with_hs256(SECRET);
    let validator = SessionValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = issuer.issue(&claims).unwrap();

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let issuer = SessionIssuer::with_hs256(SECRET);
    let validator = SessionValidator::with_hs256(b"wrong-secret-key-at-least-32-by");
    let token = issuer.issue(&valid_claims()).unwrap();

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_empty_username_claim_when_validated_then_invalid_claim() {
    let issuer = SessionIssuer::with_hs256(SECRET);
    let validator = SessionValidator::with_hs256(SECRET);
    let mut claims = valid_claims();
    claims.username = String::new();
    let token = issuer.issue(&claims).unwrap();

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_account_when_claims_built_then_fields_are_copied() {
    let account = Account::new_linked("u@x.com", "ext-1", "RiverHall42".to_string());

    let claims = SessionClaims::for_account(&account, 86400);

    assert_eq!(claims.sub, account.id.to_string());
    assert_eq!(claims.username, "RiverHall42");
    assert!(claims.linked);
    assert_eq!(claims.exp - claims.iat, 86400);
}
