use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::domain::repository::UserDirectory;
use crate::domain::types::{DEFAULT_TTL_HOURS, PasscodePurpose, normalize_email, validate_email};
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::passcode::{
    RequestPasscodeInput, RequestPasscodeUseCase, VerifyPasscodeInput, VerifyPasscodeUseCase,
};

// ── POST /auth/passcode ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RequestPasscodeRequest {
    pub email: String,
    pub purpose: PasscodePurpose,
    pub ttl_hours: Option<i64>,
}

pub async fn request_passcode(
    State(state): State<AppState>,
    Json(body): Json<RequestPasscodeRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let email = normalize_email(&body.email);
    if !validate_email(&email) {
        return Err(AccountsServiceError::InvalidEmail);
    }

    // Directory pre-check belongs to the caller of the lifecycle manager:
    // codes are only issued for identities that exist.
    state
        .user_directory()
        .find_by_email(&email)
        .await?
        .ok_or(AccountsServiceError::UserNotFound)?;

    let usecase = RequestPasscodeUseCase {
        passcodes: state.passcode_store(),
        hasher: state.hasher(),
        mailer: state.mailer(),
    };
    usecase
        .execute(RequestPasscodeInput {
            email,
            purpose: body.purpose,
            ttl_hours: body.ttl_hours.unwrap_or(DEFAULT_TTL_HOURS),
        })
        .await?;
    Ok(StatusCode::CREATED)
}

// ── POST /auth/passcode/verification ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyPasscodeRequest {
    pub email: String,
    pub code: String,
}

pub async fn verify_passcode(
    State(state): State<AppState>,
    Json(body): Json<VerifyPasscodeRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = VerifyPasscodeUseCase {
        passcodes: state.passcode_store(),
        hasher: state.hasher(),
    };
    usecase
        .execute(VerifyPasscodeInput {
            email: body.email,
            candidate: body.code,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
