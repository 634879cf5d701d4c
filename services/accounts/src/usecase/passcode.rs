use chrono::{Duration, Utc};
use rand::Rng;

use crate::domain::repository::{Mailer, PasscodeStore, SecretHasher};
use crate::domain::types::{
    MAX_TTL_HOURS, MIN_TTL_HOURS, OutboundMail, Passcode, PasscodePurpose, normalize_email,
    validate_email,
};
use crate::error::AccountsServiceError;

/// Size of the numeric code space: 4 digits, zero-padded.
const PASSCODE_SPACE: u32 = 10_000;

fn generate_code() -> String {
    let mut rng = rand::rng();
    format!("{:04}", rng.random_range(0..PASSCODE_SPACE))
}

fn passcode_mail(to: &str, purpose: PasscodePurpose, code: &str, ttl_hours: i64) -> OutboundMail {
    OutboundMail {
        to: to.to_owned(),
        subject: purpose.mail_subject().to_owned(),
        html_body: format!(
            "<p>{}</p>\n<p>Your passcode is: <strong>{}</strong></p>\n<p>This code will expire in: {} hour(s)</p>",
            purpose.mail_intro(),
            code,
            ttl_hours,
        ),
    }
}

// ── RequestPasscode ──────────────────────────────────────────────────────────

pub struct RequestPasscodeInput {
    pub email: String,
    pub purpose: PasscodePurpose,
    pub ttl_hours: i64,
}

pub struct RequestPasscodeUseCase<S, H, M>
where
    S: PasscodeStore,
    H: SecretHasher,
    M: Mailer,
{
    pub passcodes: S,
    pub hasher: H,
    pub mailer: M,
}

impl<S, H, M> RequestPasscodeUseCase<S, H, M>
where
    S: PasscodeStore,
    H: SecretHasher,
    M: Mailer,
{
    pub async fn execute(&self, input: RequestPasscodeInput) -> Result<(), AccountsServiceError> {
        let email = normalize_email(&input.email);
        if !validate_email(&email) {
            return Err(AccountsServiceError::InvalidEmail);
        }
        if !(MIN_TTL_HOURS..=MAX_TTL_HOURS).contains(&input.ttl_hours) {
            return Err(AccountsServiceError::InvalidTtl);
        }

        let code = generate_code();
        let code_hash = self.hasher.hash(&code)?;

        let now = Utc::now();
        let record = Passcode {
            email: email.clone(),
            code_hash,
            created_at: now,
            expires_at: now + Duration::hours(input.ttl_hours),
        };

        // Single upsert keyed by email: any in-flight code for this identity
        // is superseded atomically — a second request always wins.
        self.passcodes.put(&record).await?;

        // The record is already persisted; a failed delivery must surface as
        // its own error so the caller can offer a retry path.
        self.mailer
            .send(&passcode_mail(&email, input.purpose, &code, input.ttl_hours))
            .await
            .map_err(AccountsServiceError::DeliveryFailed)?;

        Ok(())
    }
}

// ── VerifyPasscode ───────────────────────────────────────────────────────────

pub struct VerifyPasscodeInput {
    pub email: String,
    pub candidate: String,
}

pub struct VerifyPasscodeUseCase<S, H>
where
    S: PasscodeStore,
    H: SecretHasher,
{
    pub passcodes: S,
    pub hasher: H,
}

impl<S, H> VerifyPasscodeUseCase<S, H>
where
    S: PasscodeStore,
    H: SecretHasher,
{
    /// Proof of possession only: a success reports that the candidate
    /// matched the live code and consumed it. Whatever that proof
    /// authorizes (marking verified, changing a password) is the caller's
    /// follow-up, not this manager's.
    pub async fn execute(&self, input: VerifyPasscodeInput) -> Result<(), AccountsServiceError> {
        let email = normalize_email(&input.email);

        let record = self
            .passcodes
            .get(&email)
            .await?
            .ok_or(AccountsServiceError::PasscodeNotFound)?;

        if record.is_expired() {
            // Expiry consumes the record: the next attempt, right or wrong,
            // reports PasscodeNotFound.
            self.passcodes.delete(&email).await?;
            return Err(AccountsServiceError::PasscodeExpired);
        }

        if !self.hasher.verify(&input.candidate, &record.code_hash)? {
            // Mismatch leaves the record in place until expiry or supersession.
            return Err(AccountsServiceError::PasscodeMismatch);
        }

        self.passcodes.delete(&email).await?;
        Ok(())
    }
}
