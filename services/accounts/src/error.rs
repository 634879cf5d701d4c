use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mingle_core::error::error_response;

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("invalid name")]
    InvalidName,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid password")]
    InvalidPassword,
    #[error("invalid ttl")]
    InvalidTtl,
    #[error("email already registered")]
    EmailTaken,
    #[error("user not found")]
    UserNotFound,
    // NotFound and Mismatch share one message so a response never confirms
    // whether an identity has a code outstanding; kinds stay distinct.
    #[error("invalid passcode")]
    PasscodeNotFound,
    #[error("passcode expired, request a new one")]
    PasscodeExpired,
    #[error("invalid passcode")]
    PasscodeMismatch,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("account not verified")]
    AccountNotVerified,
    #[error("invalid token")]
    InvalidToken,
    #[error("passcode issued but delivery failed")]
    DeliveryFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidTtl => "INVALID_TTL",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PasscodeNotFound => "PASSCODE_NOT_FOUND",
            Self::PasscodeExpired => "PASSCODE_EXPIRED",
            Self::PasscodeMismatch => "PASSCODE_MISMATCH",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AccountNotVerified => "ACCOUNT_NOT_VERIFIED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::DeliveryFailed(_) => "DELIVERY_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidName
            | Self::InvalidEmail
            | Self::InvalidPassword
            | Self::InvalidTtl => StatusCode::BAD_REQUEST,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::PasscodeNotFound
            | Self::PasscodeExpired
            | Self::PasscodeMismatch
            | Self::InvalidCredentials
            | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::AccountNotVerified => StatusCode::FORBIDDEN,
            Self::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors. Internal and
        // DeliveryFailed need the anyhow chain so the root cause is traceable.
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            Self::DeliveryFailed(e) => {
                tracing::error!(error = %e, kind = "DELIVERY_FAILED", "passcode delivery failed");
            }
            _ => {}
        }
        error_response(status, self.kind(), &self.to_string())
    }
}
