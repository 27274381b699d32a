use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use crate::sender::EmailSender;

const SENDGRID_API_URL: &str = "https://api.sendgrid.com";

#[derive(Serialize)]
struct EmailAddress {
    email: String,
}

#[derive(Serialize)]
struct Personalization {
    to: Vec<EmailAddress>,
}

#[derive(Serialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

#[derive(Serialize)]
struct SendMailRequest {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    subject: String,
    content: Vec<Content>,
}

#[derive(Debug, Clone)]
pub struct SendgridClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SendgridClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, SENDGRID_API_URL.to_string())
    }

    /// Point the client somewhere other than the real API. Tests use this
    /// with a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::new();
        SendgridClient {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl EmailSender for SendgridClient {
    async fn send(
        &self,
        to: &str,
        from: &str,
        subject: &str,
        html_body: &str,
    ) -> anyhow::Result<()> {
        let request = SendMailRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: to.to_string(),
                }],
            }],
            from: EmailAddress {
                email: from.to_string(),
            },
            subject: subject.to_string(),
            content: vec![Content {
                content_type: "text/html".to_string(),
                value: html_body.to_string(),
            }],
        };

        info!("Sending email to {} via SendGrid", to);
        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("SendGrid API error: {}", error_text);
            return Err(anyhow::anyhow!(
                "SendGrid API error ({}): {}",
                status,
                error_text
            ));
        }

        Ok(())
    }
}
