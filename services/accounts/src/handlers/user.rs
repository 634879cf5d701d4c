use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::repository::UserDirectory;
use crate::domain::types::normalize_email;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::passcode::{VerifyPasscodeInput, VerifyPasscodeUseCase};
use crate::usecase::signup::{RegisterAccountInput, RegisterAccountUseCase};

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "mingle_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AccountsServiceError> {
    let usecase = RegisterAccountUseCase {
        directory: state.user_directory(),
        hasher: state.hasher(),
    };
    let account = usecase
        .execute(RegisterAccountInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: account.id.to_string(),
            name: account.name,
            email: account.email,
            created_at: account.created_at,
        }),
    ))
}

// ── POST /users/verification ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

/// Possession proved → the purpose-specific effect: stamp the account
/// verified. The lifecycle manager stays out of account state.
pub async fn verify_email(
    State(state): State<AppState>,
    Json(body): Json<VerifyEmailRequest>,
) -> Result<StatusCode, AccountsServiceError> {
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

    let marked = state
        .user_directory()
        .mark_verified(&normalize_email(&body.email))
        .await?;
    if !marked {
        return Err(AccountsServiceError::UserNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
