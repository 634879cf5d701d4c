use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use serde::{Deserialize, Serialize};

use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::session::{LoginInput, LoginUseCase, validate_access_token};

// ── POST /auth/session ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub access_token_exp: u64,
    pub account: AccountSummary,
}

#[derive(Serialize)]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AccountsServiceError> {
    let usecase = LoginUseCase {
        directory: state.user_directory(),
        hasher: state.hasher(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        access_token: out.access_token,
        access_token_exp: out.access_token_exp,
        account: AccountSummary {
            id: out.account.id.to_string(),
            name: out.account.name,
            email: out.account.email,
        },
    }))
}

// ── GET /auth/session ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CheckSessionResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub access_token_exp: u64,
}

pub async fn check_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<CheckSessionResponse>), AccountsServiceError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AccountsServiceError::InvalidToken)?;

    let claims = validate_access_token(token, &state.jwt_secret)?;
    Ok((
        StatusCode::OK,
        Json(CheckSessionResponse {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
            access_token_exp: claims.exp,
        }),
    ))
}
