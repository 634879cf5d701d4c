use sea_orm::Database;
use tracing::info;
use url::Url;

use mingle_accounts::config::AccountsConfig;
use mingle_accounts::infra::mailer::{AnyMailer, HttpMailer, LogMailer};
use mingle_accounts::router::build_router;
use mingle_accounts::state::AppState;

#[tokio::main]
async fn main() {
    mingle_core::tracing::init_tracing();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = match config.mail_api_url {
        Some(ref raw) => {
            let api_url = Url::parse(raw).expect("invalid MAIL_API_URL");
            let api_token = config.mail_api_token.clone().expect("MAIL_API_TOKEN");
            AnyMailer::Http(HttpMailer::new(api_url, api_token, config.mail_sender.clone()))
        }
        None => {
            info!("MAIL_API_URL not set, using log-only mailer");
            AnyMailer::Log(LogMailer)
        }
    };

    let state = AppState {
        db,
        mailer,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
