use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::domain::repository::SecretHasher;
use crate::error::AccountsServiceError;

/// Argon2id with library-default parameters. One hasher covers account
/// passwords and passcodes; each hash carries its own salt in the PHC
/// string, so equal inputs never produce equal stored values.
#[derive(Clone, Default)]
pub struct Argon2SecretHasher;

impl SecretHasher for Argon2SecretHasher {
    fn hash(&self, secret: &str) -> Result<String, AccountsServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AccountsServiceError::Internal(anyhow::anyhow!("hash secret: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, secret: &str, hashed: &str) -> Result<bool, AccountsServiceError> {
        let parsed = PasswordHash::new(hashed)
            .map_err(|e| AccountsServiceError::Internal(anyhow::anyhow!("parse secret hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok())
    }
}
