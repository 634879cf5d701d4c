use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::{Expr, OnConflict},
};

use mingle_accounts_schema::{accounts, passcodes};

use crate::domain::repository::{PasscodeStore, UserDirectory};
use crate::domain::types::{Account, Passcode};
use crate::error::AccountsServiceError;

// ── Passcode store ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPasscodeStore {
    pub db: DatabaseConnection,
}

impl PasscodeStore for DbPasscodeStore {
    async fn put(&self, record: &Passcode) -> Result<(), AccountsServiceError> {
        let row = passcodes::ActiveModel {
            email: Set(record.email.clone()),
            code_hash: Set(record.code_hash.clone()),
            created_at: Set(record.created_at),
            expires_at: Set(record.expires_at),
        };
        // Single-statement upsert: a concurrent reader of the same key sees
        // either the old row or the new one, never a gap between a delete
        // and an insert.
        passcodes::Entity::insert(row)
            .on_conflict(
                OnConflict::column(passcodes::Column::Email)
                    .update_columns([
                        passcodes::Column::CodeHash,
                        passcodes::Column::CreatedAt,
                        passcodes::Column::ExpiresAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("put passcode")?;
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<Passcode>, AccountsServiceError> {
        let model = passcodes::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("get passcode")?;
        Ok(model.map(passcode_from_model))
    }

    async fn delete(&self, email: &str) -> Result<(), AccountsServiceError> {
        passcodes::Entity::delete_many()
            .filter(passcodes::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete passcode")?;
        Ok(())
    }
}

fn passcode_from_model(model: passcodes::Model) -> Passcode {
    Passcode {
        email: model.email,
        code_hash: model.code_hash,
        created_at: model.created_at,
        expires_at: model.expires_at,
    }
}

// ── User directory ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserDirectory {
    pub db: DatabaseConnection,
}

impl UserDirectory for DbUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        accounts::ActiveModel {
            id: Set(account.id),
            name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            password_hash: Set(account.password_hash.clone()),
            verified_at: Set(account.verified_at),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create account")?;
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<bool, AccountsServiceError> {
        let now = Utc::now();
        let result = accounts::Entity::update_many()
            .col_expr(accounts::Column::VerifiedAt, Expr::value(Some(now)))
            .col_expr(accounts::Column::UpdatedAt, Expr::value(now))
            .filter(accounts::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("mark account verified")?;
        Ok(result.rows_affected > 0)
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError> {
        let result = accounts::Entity::update_many()
            .col_expr(
                accounts::Column::PasswordHash,
                Expr::value(password_hash.to_owned()),
            )
            .col_expr(accounts::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(accounts::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("update account password")?;
        Ok(result.rows_affected > 0)
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        verified_at: model.verified_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
