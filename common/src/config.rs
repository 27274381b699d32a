use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub server_host: String,
    pub server_port: u16,

    // Email provider (SendGrid)
    pub sendgrid_api_key: String,
    pub sendgrid_from_email: String,
    pub admin_email: String,

    // SMS provider (Twilio)
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from: String,
    pub admin_phone: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("SERVER_PORT must be a valid port number");

        let sendgrid_api_key = env::var("SENDGRID_API_KEY")?;
        let sendgrid_from_email = env::var("SENDGRID_FROM_EMAIL")?;
        let admin_email = env::var("ADMIN_EMAIL")?;

        let twilio_account_sid = env::var("TWILIO_ACCOUNT_SID")?;
        let twilio_auth_token = env::var("TWILIO_AUTH_TOKEN")?;
        let twilio_from = env::var("TWILIO_FROM")?;

        // Admin SMS notification is skipped entirely when unset.
        let admin_phone = env::var("ADMIN_PHONE").ok();

        Ok(Config {
            server_host,
            server_port,
            sendgrid_api_key,
            sendgrid_from_email,
            admin_email,
            twilio_account_sid,
            twilio_auth_token,
            twilio_from,
            admin_phone,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
