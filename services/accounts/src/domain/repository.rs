#![allow(async_fn_in_trait)]

use crate::domain::types::{Account, OutboundMail, Passcode};
use crate::error::AccountsServiceError;

/// Keyed store for one-time passcodes, one record per email.
pub trait PasscodeStore: Send + Sync {
    /// Upsert by email, unconditionally replacing any existing record.
    /// Must be atomic with respect to concurrent readers of the same key.
    async fn put(&self, record: &Passcode) -> Result<(), AccountsServiceError>;

    async fn get(&self, email: &str) -> Result<Option<Passcode>, AccountsServiceError>;

    /// Idempotent; deleting an absent record is not an error.
    async fn delete(&self, email: &str) -> Result<(), AccountsServiceError>;
}

/// Directory of registered accounts. Handlers consult it before issuing
/// passcodes and to apply purpose-specific effects after verification;
/// the passcode lifecycle itself never touches it.
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str)
    -> Result<Option<Account>, AccountsServiceError>;

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError>;

    /// Stamp `verified_at`. Returns `false` if no such account exists.
    async fn mark_verified(&self, email: &str) -> Result<bool, AccountsServiceError>;

    /// Replace the stored password hash. Returns `false` if no such account exists.
    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError>;
}

/// One-way hashing for short secrets (passcodes, passwords).
pub trait SecretHasher: Send + Sync {
    fn hash(&self, secret: &str) -> Result<String, AccountsServiceError>;

    /// Constant-time comparison is the hashing primitive's responsibility.
    fn verify(&self, secret: &str, hashed: &str) -> Result<bool, AccountsServiceError>;
}

/// Outbound notification sink. Errors are raw infrastructure failures;
/// the caller decides what a failed delivery means for its operation.
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), anyhow::Error>;
}
