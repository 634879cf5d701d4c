use sea_orm::DatabaseConnection;

use crate::infra::db::{DbPasscodeStore, DbUserDirectory};
use crate::infra::hash::Argon2SecretHasher;
use crate::infra::mailer::AnyMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: AnyMailer,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_directory(&self) -> DbUserDirectory {
        DbUserDirectory {
            db: self.db.clone(),
        }
    }

    pub fn passcode_store(&self) -> DbPasscodeStore {
        DbPasscodeStore {
            db: self.db.clone(),
        }
    }

    pub fn hasher(&self) -> Argon2SecretHasher {
        Argon2SecretHasher
    }

    pub fn mailer(&self) -> AnyMailer {
        self.mailer.clone()
    }
}
