use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when sending email
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Resend email-delivery API client
///
/// One outbound call per notification; delivery failures are reported to
/// the caller, never retried or queued here.
pub struct ResendClient {
    base_url: String,
    api_key: String,
    from_address: String,
    client: Client,
}

impl ResendClient {
    /// Create a new Resend client
    pub fn new(base_url: String, api_key: String, from_address: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            from_address,
            client,
        }
    }

    /// Send a plain-text email. Success is any 2xx response.
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), MailerError> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));

        let payload = EmailPayload {
            from: &self.from_address,
            to,
            subject,
            text,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Email delivery to {} failed: {} - {}", to, status, body);
            return Err(MailerError::ApiError(format!(
                "Email delivery failed: {}",
                status
            )));
        }

        tracing::debug!("Email sent to {}", to);

        Ok(())
    }
}
