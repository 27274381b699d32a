use async_trait::async_trait;

/// Outbound transactional email capability. One configured instance is built
/// at startup and shared through app state.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, from: &str, subject: &str, html_body: &str)
        -> anyhow::Result<()>;
}

/// Outbound SMS capability.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, from: &str, body: &str) -> anyhow::Result<()>;
}
