use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use mingle_core::health::{healthz, readyz};
use mingle_core::middleware::request_id_layer;

use crate::handlers::{
    passcode::{request_passcode, verify_passcode},
    password::reset_password,
    session::{check_session, login},
    user::{register, verify_email},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/users", post(register))
        .route("/users/verification", post(verify_email))
        // Passcodes
        .route("/auth/passcode", post(request_passcode))
        .route("/auth/passcode/verification", post(verify_passcode))
        // Sessions
        .route("/auth/session", post(login))
        .route("/auth/session", get(check_session))
        // Password reset
        .route("/auth/password", post(reset_password))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
