use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Set once the signup passcode has been confirmed.
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-time passcode bound to an email identity. Only the hash of the
/// code is held here; the plaintext exists solely in the outbound mail.
#[derive(Debug, Clone)]
pub struct Passcode {
    pub email: String,
    pub code_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Passcode {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Why a passcode was issued. Selects the outbound mail wording and the
/// caller's follow-up action; verification itself ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasscodePurpose {
    SignupVerification,
    PasswordReset,
    Login,
}

impl PasscodePurpose {
    pub fn mail_subject(self) -> &'static str {
        match self {
            Self::SignupVerification => "Verify your Mingle account",
            Self::PasswordReset => "Reset your Mingle password",
            Self::Login => "Your Mingle sign-in code",
        }
    }

    pub fn mail_intro(self) -> &'static str {
        match self {
            Self::SignupVerification => "Enter this code to verify your email address.",
            Self::PasswordReset => "Enter this code to choose a new password.",
            Self::Login => "Enter this code to finish signing in.",
        }
    }
}

/// Outbound mail envelope handed to the mailer port.
#[derive(Debug, Clone)]
pub struct OutboundMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Passcode time-to-live bounds, in hours. Out-of-range requests are a
/// configuration error, not a fatal one.
pub const MIN_TTL_HOURS: i64 = 1;
pub const MAX_TTL_HOURS: i64 = 5;

/// TTL applied when a request does not name one.
pub const DEFAULT_TTL_HOURS: i64 = 1;

/// Access-token lifetime in seconds.
pub const ACCESS_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Lowercase + trim. Applied to every email before it reaches a port, so
/// the store key and directory lookups agree on one spelling.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Accepts `local@domain.tld` shapes within the 4..=255 length bounds.
/// Deliverability is the mail provider's problem, not ours.
pub fn validate_email(email: &str) -> bool {
    if email.len() < 4 || email.len() > 255 {
        return false;
    }
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub fn validate_name(name: &str) -> bool {
    let len = name.chars().count();
    (4..=50).contains(&len)
}

pub fn validate_password(password: &str) -> bool {
    let len = password.chars().count();
    (4..=50).contains(&len)
}
