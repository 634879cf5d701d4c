/// Accounts service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3110). Env var: `ACCOUNTS_PORT`.
    pub accounts_port: u16,
    /// HTTP mail API endpoint. Unset selects the log-only mailer. Env var: `MAIL_API_URL`.
    pub mail_api_url: Option<String>,
    /// Bearer token for the mail API. Required when `MAIL_API_URL` is set.
    pub mail_api_token: Option<String>,
    /// From-address on outbound mail (default "no-reply@mingle.app"). Env var: `MAIL_SENDER`.
    pub mail_sender: String,
}

impl AccountsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            accounts_port: std::env::var("ACCOUNTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
            mail_api_url: std::env::var("MAIL_API_URL").ok(),
            mail_api_token: std::env::var("MAIL_API_TOKEN").ok(),
            mail_sender: std::env::var("MAIL_SENDER")
                .unwrap_or_else(|_| "no-reply@mingle.app".to_owned()),
        }
    }
}
