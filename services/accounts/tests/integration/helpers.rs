use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use mingle_accounts::domain::repository::{Mailer, PasscodeStore, SecretHasher, UserDirectory};
use mingle_accounts::domain::types::{Account, OutboundMail, Passcode};
use mingle_accounts::error::AccountsServiceError;

// ── MemoryPasscodeStore ──────────────────────────────────────────────────────

pub struct MemoryPasscodeStore {
    records: Arc<Mutex<HashMap<String, Passcode>>>,
}

impl MemoryPasscodeStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Shared handle to the backing map for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<HashMap<String, Passcode>>> {
        Arc::clone(&self.records)
    }

    /// A second store view over the same records, for composing use cases.
    pub fn share(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl PasscodeStore for MemoryPasscodeStore {
    async fn put(&self, record: &Passcode) -> Result<(), AccountsServiceError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.email.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<Passcode>, AccountsServiceError> {
        Ok(self.records.lock().unwrap().get(email).cloned())
    }

    async fn delete(&self, email: &str) -> Result<(), AccountsServiceError> {
        self.records.lock().unwrap().remove(email);
        Ok(())
    }
}

// ── MockUserDirectory ────────────────────────────────────────────────────────

pub struct MockUserDirectory {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockUserDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Account>>> {
        Arc::clone(&self.accounts)
    }

    pub fn share(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
        }
    }
}

impl UserDirectory for MockUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> Result<bool, AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.iter_mut().find(|a| a.email == email) {
            Some(account) => {
                account.verified_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.iter_mut().find(|a| a.email == email) {
            Some(account) => {
                account.password_hash = password_hash.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── Hasher / mailer test doubles ─────────────────────────────────────────────

/// Transparent hash so tests can assert without Argon2 latency.
pub struct FakeHasher;

impl SecretHasher for FakeHasher {
    fn hash(&self, secret: &str) -> Result<String, AccountsServiceError> {
        Ok(format!("hashed:{secret}"))
    }

    fn verify(&self, secret: &str, hashed: &str) -> Result<bool, AccountsServiceError> {
        Ok(hashed == format!("hashed:{secret}"))
    }
}

pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutboundMail>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<OutboundMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), anyhow::Error> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

pub struct FailingMailer;

impl Mailer for FailingMailer {
    async fn send(&self, _mail: &OutboundMail) -> Result<(), anyhow::Error> {
        Err(anyhow::anyhow!("mail api unreachable"))
    }
}

/// Plaintext code carried by a captured mail.
pub fn code_in(mail: &OutboundMail) -> String {
    let start = mail.html_body.find("<strong>").unwrap() + "<strong>".len();
    let end = mail.html_body.find("</strong>").unwrap();
    mail.html_body[start..end].to_owned()
}

pub fn last_code(sent: &Arc<Mutex<Vec<OutboundMail>>>) -> String {
    let sent = sent.lock().unwrap();
    code_in(sent.last().expect("at least one mail sent"))
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_account(email: &str, verified: bool) -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::now_v7(),
        name: "Ada Lovelace".to_owned(),
        email: email.to_owned(),
        password_hash: "hashed:difference-engine".to_owned(),
        verified_at: verified.then_some(now),
        created_at: now,
        updated_at: now,
    }
}

/// A passcode persisted `age` ago with the given ttl, hashed by `FakeHasher`.
pub fn seeded_passcode(email: &str, code: &str, age: Duration, ttl: Duration) -> Passcode {
    let created_at = Utc::now() - age;
    Passcode {
        email: email.to_owned(),
        code_hash: format!("hashed:{code}"),
        created_at,
        expires_at: created_at + ttl,
    }
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests-only";
