use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::repository::{SecretHasher, UserDirectory};
use crate::domain::types::{ACCESS_TOKEN_TTL_SECS, Account, normalize_email};
use crate::error::AccountsServiceError;

/// JWT claims for access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(
    account: &Account,
    secret: &str,
) -> Result<(String, u64), AccountsServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_TTL_SECS;
    let claims = TokenClaims {
        sub: account.id.to_string(),
        name: account.name.clone(),
        email: account.email.clone(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AccountsServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Validate an access token and return its claims.
pub fn validate_access_token(
    token: &str,
    secret: &str,
) -> Result<TokenClaims, AccountsServiceError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AccountsServiceError::InvalidToken)?;

    Ok(data.claims)
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub account: Account,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct LoginUseCase<D, H>
where
    D: UserDirectory,
    H: SecretHasher,
{
    pub directory: D,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<D, H> LoginUseCase<D, H>
where
    D: UserDirectory,
    H: SecretHasher,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AccountsServiceError> {
        let email = normalize_email(&input.email);

        // One error for both unknown email and bad password: the response
        // must not reveal which half failed.
        let account = self
            .directory
            .find_by_email(&email)
            .await?
            .ok_or(AccountsServiceError::InvalidCredentials)?;

        if !self.hasher.verify(&input.password, &account.password_hash)? {
            return Err(AccountsServiceError::InvalidCredentials);
        }

        // Passcode gate: no session until the signup code was confirmed.
        if account.verified_at.is_none() {
            return Err(AccountsServiceError::AccountNotVerified);
        }

        let (access_token, access_token_exp) = issue_access_token(&account, &self.jwt_secret)?;
        Ok(LoginOutput {
            account,
            access_token,
            access_token_exp,
        })
    }
}
