use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use crate::sender::SmsSender;

const TWILIO_API_URL: &str = "https://api.twilio.com";

#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: Client,
    account_sid: String,
    auth_token: String,
    base_url: String,
}

impl TwilioClient {
    pub fn new(account_sid: String, auth_token: String) -> Self {
        Self::with_base_url(account_sid, auth_token, TWILIO_API_URL.to_string())
    }

    pub fn with_base_url(account_sid: String, auth_token: String, base_url: String) -> Self {
        let client = Client::new();
        TwilioClient {
            client,
            account_sid,
            auth_token,
            base_url,
        }
    }
}

#[async_trait]
impl SmsSender for TwilioClient {
    async fn send(&self, to: &str, from: &str, body: &str) -> anyhow::Result<()> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );

        info!("Sending SMS to {} via Twilio", to);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", from), ("Body", body)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Twilio API error: {}", error_text);
            return Err(anyhow::anyhow!(
                "Twilio API error ({}): {}",
                status,
                error_text
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_posts_form_encoded_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/2010-04-01/Accounts/AC123/Messages.json")
            .match_header(
                "content-type",
                mockito::Matcher::Regex("application/x-www-form-urlencoded".to_string()),
            )
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("To".to_string(), "+15873946940".to_string()),
                mockito::Matcher::UrlEncoded("From".to_string(), "+14035550100".to_string()),
                mockito::Matcher::UrlEncoded("Body".to_string(), "hi there".to_string()),
            ]))
            .with_status(201)
            .with_body(r#"{"sid":"SM123","status":"queued"}"#)
            .create_async()
            .await;

        let client = TwilioClient::with_base_url(
            "AC123".to_string(),
            "token".to_string(),
            server.url(),
        );
        client
            .send("+15873946940", "+14035550100", "hi there")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_surfaces_api_error_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/2010-04-01/Accounts/AC123/Messages.json")
            .with_status(400)
            .with_body(r#"{"code":21211,"message":"Invalid 'To' phone number"}"#)
            .create_async()
            .await;

        let client = TwilioClient::with_base_url(
            "AC123".to_string(),
            "token".to_string(),
            server.url(),
        );
        let err = client
            .send("not-a-number", "+14035550100", "hi")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid 'To' phone number"));
    }
}
