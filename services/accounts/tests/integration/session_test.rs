use jsonwebtoken::{EncodingKey, Header, encode};

use mingle_accounts::error::AccountsServiceError;
use mingle_accounts::usecase::session::{
    TokenClaims, issue_access_token, validate_access_token,
};

use crate::helpers::{TEST_JWT_SECRET, test_account};

#[tokio::test]
async fn should_issue_access_token_that_validates_successfully() {
    let account = test_account("ada@example.com", true);
    let (token, exp) = issue_access_token(&account, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());
    assert!(exp > 0);

    let claims = validate_access_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, account.id.to_string());
    assert_eq!(claims.name, account.name);
    assert_eq!(claims.email, account.email);
    assert_eq!(claims.exp, exp);
}

#[tokio::test]
async fn should_reject_token_signed_with_wrong_secret() {
    let (token, _) = issue_access_token(&test_account("ada@example.com", true), TEST_JWT_SECRET)
        .unwrap();
    let result = validate_access_token(&token, "wrong-secret");
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_garbage_token_string() {
    let result = validate_access_token("not-a-jwt", TEST_JWT_SECRET);
    assert!(matches!(result, Err(AccountsServiceError::InvalidToken)));
}

#[tokio::test]
async fn should_reject_expired_token() {
    let account = test_account("ada@example.com", true);
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    // Past the default 60s validation leeway.
    let claims = TokenClaims {
        sub: account.id.to_string(),
        name: account.name.clone(),
        email: account.email.clone(),
        exp: now - 120,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_access_token(&token, TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(AccountsServiceError::InvalidToken)),
        "expected InvalidToken for expired token, got {result:?}"
    );
}
