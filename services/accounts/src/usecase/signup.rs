use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{SecretHasher, UserDirectory};
use crate::domain::types::{
    Account, normalize_email, validate_email, validate_name, validate_password,
};
use crate::error::AccountsServiceError;

pub struct RegisterAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterAccountUseCase<D, H>
where
    D: UserDirectory,
    H: SecretHasher,
{
    pub directory: D,
    pub hasher: H,
}

impl<D, H> RegisterAccountUseCase<D, H>
where
    D: UserDirectory,
    H: SecretHasher,
{
    /// Creates an unverified account. The caller follows up by issuing a
    /// signup-verification passcode.
    pub async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<Account, AccountsServiceError> {
        let name = input.name.trim();
        if !validate_name(name) {
            return Err(AccountsServiceError::InvalidName);
        }
        let email = normalize_email(&input.email);
        if !validate_email(&email) {
            return Err(AccountsServiceError::InvalidEmail);
        }
        if !validate_password(&input.password) {
            return Err(AccountsServiceError::InvalidPassword);
        }

        if self.directory.find_by_email(&email).await?.is_some() {
            return Err(AccountsServiceError::EmailTaken);
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            email,
            password_hash: self.hasher.hash(&input.password)?,
            verified_at: None,
            created_at: now,
            updated_at: now,
        };
        self.directory.create(&account).await?;
        Ok(account)
    }
}
