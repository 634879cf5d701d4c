use sea_orm::entity::prelude::*;

/// One-time passcode bound to an email identity.
///
/// The email column is the primary key: at most one passcode per identity
/// can exist, and issuing a new one replaces the row in place. Only the
/// Argon2id hash of the code is stored; plaintext never reaches this table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "passcodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub code_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
