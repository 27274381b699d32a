use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Everything the dispatch endpoints can fail with. Input errors map to 400
/// and are raised before any provider call; provider errors map to 500 and
/// carry the provider's message through to the caller.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Email is required when contact method is email")]
    MissingEmail,

    #[error("Phone number is required when contact method is SMS")]
    MissingPhone,

    #[error("To, subject, and message content are required")]
    MissingEmailContent,

    #[error("Message and phone number are required")]
    MissingSmsFields,

    #[error("{0}")]
    Provider(String),
}

impl ResponseError for DispatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
