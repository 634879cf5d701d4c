use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::domain::repository::{SecretHasher, UserDirectory};
use crate::domain::types::{normalize_email, validate_password};
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::passcode::{VerifyPasscodeInput, VerifyPasscodeUseCase};

// ── POST /auth/password ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Possession proved → the purpose-specific effect: replace the stored
/// password hash.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    if !validate_password(&body.new_password) {
        return Err(AccountsServiceError::InvalidPassword);
    }

    let usecase = VerifyPasscodeUseCase {
        passcodes: state.passcode_store(),
        hasher: state.hasher(),
    };
    usecase
        .execute(VerifyPasscodeInput {
            email: body.email.clone(),
            candidate: body.code,
        })
        .await?;

    let password_hash = state.hasher().hash(&body.new_password)?;
    let updated = state
        .user_directory()
        .update_password(&normalize_email(&body.email), &password_hash)
        .await?;
    if !updated {
        return Err(AccountsServiceError::UserNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
