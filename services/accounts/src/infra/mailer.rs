use anyhow::Context as _;
use url::Url;

use crate::domain::repository::Mailer;
use crate::domain::types::OutboundMail;

/// Delivers through an HTTP mail API (JSON POST, bearer auth).
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: Url,
    api_token: String,
    sender: String,
}

impl HttpMailer {
    pub fn new(api_url: Url, api_token: String, sender: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_token,
            sender,
        }
    }
}

impl Mailer for HttpMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), anyhow::Error> {
        let resp = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_token)
            .json(&serde_json::json!({
                "from": self.sender,
                "to": mail.to,
                "subject": mail.subject,
                "html": mail.html_body,
            }))
            .send()
            .await
            .context("mail api request")?;
        if !resp.status().is_success() {
            anyhow::bail!("mail api responded {}", resp.status());
        }
        Ok(())
    }
}

/// Local-dev sink: logs the envelope instead of sending.
/// The body is never logged — it carries the plaintext code.
#[derive(Clone, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), anyhow::Error> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "mail delivery stub");
        Ok(())
    }
}

/// Mailer selected at startup from configuration.
#[derive(Clone)]
pub enum AnyMailer {
    Http(HttpMailer),
    Log(LogMailer),
}

impl Mailer for AnyMailer {
    async fn send(&self, mail: &OutboundMail) -> Result<(), anyhow::Error> {
        match self {
            Self::Http(mailer) => mailer.send(mail).await,
            Self::Log(mailer) => mailer.send(mail).await,
        }
    }
}
