use reqwest::Client;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

const SEND_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
}

/// Thin client for the transactional email provider's HTTP API.
#[derive(Clone)]
pub struct EmailClient {
    client: Client,
    api_key: String,
    from: String,
}

impl EmailClient {
    pub fn new(api_key: String, from: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from,
        }
    }

    pub async fn send(&self, to: &[String], subject: &str, html: &str) -> ApiResult<()> {
        let body = SendEmailRequest {
            from: &self.from,
            to,
            subject,
            html,
        };

        let response = self
            .client
            .post(SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("Email request failed: {e}")))?;

        if response.status().is_success() {
            tracing::info!("Notification email sent to {} recipient(s)", to.len());
            Ok(())
        } else {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Email send failed: HTTP {status}: {error_text}");
            Err(ApiError::Upstream(format!(
                "Email provider returned HTTP {status}"
            )))
        }
    }
}
