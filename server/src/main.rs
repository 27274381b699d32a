use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use common::{
    config::Config,
    models::{ContactMethod, ContactSubmission, SendEmailRequest, SendSmsRequest},
    utils::normalize_phone,
};
use dotenv::dotenv;
use notify::{EmailSender, SendgridClient, SmsSender, TwilioClient};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::DispatchError;

mod error;

struct AppState {
    config: Config,
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
}

#[actix_web::post("/api/contact")]
async fn contact(
    req: web::Json<ContactSubmission>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, DispatchError> {
    let AppState { config, email, sms } = &**app_state;
    let submission = req.into_inner();

    if submission.name.trim().is_empty() || submission.message.trim().is_empty() {
        return Err(DispatchError::MissingFields);
    }

    match submission.contact_method {
        ContactMethod::EMAIL => {
            let address = submission
                .email
                .as_deref()
                .filter(|e| !e.trim().is_empty())
                .ok_or(DispatchError::MissingEmail)?;

            info!(
                "Dispatching contact submission from {} over email",
                submission.name
            );

            let notification = format!(
                "<h3>New contact form submission</h3>\
                 <p><strong>Name:</strong> {}</p>\
                 <p><strong>Email:</strong> {}</p>\
                 <p><strong>Message:</strong></p>\
                 <p>{}</p>",
                submission.name, address, submission.message
            );
            email
                .send(
                    &config.admin_email,
                    &config.sendgrid_from_email,
                    &format!("New contact from {}", submission.name),
                    &notification,
                )
                .await
                .map_err(|e| DispatchError::Provider(e.to_string()))?;

            let confirmation = format!(
                "<p>Hi {},</p>\
                 <p>Thanks for reaching out! I got your message and will get back \
                 to you soon.</p>\
                 <p>This is an automated confirmation - please do not reply.</p>",
                submission.name
            );
            email
                .send(
                    address,
                    &config.sendgrid_from_email,
                    "Thanks for reaching out!",
                    &confirmation,
                )
                .await
                .map_err(|e| DispatchError::Provider(e.to_string()))?;
        }
        ContactMethod::SMS => {
            let phone = submission
                .phone
                .as_deref()
                .filter(|p| !p.trim().is_empty())
                .ok_or(DispatchError::MissingPhone)?;

            info!(
                "Dispatching contact submission from {} over SMS",
                submission.name
            );

            let formatted_phone = normalize_phone(phone);
            sms.send(
                &formatted_phone,
                &config.twilio_from,
                &format!(
                    "Hi {}, thank you for your message! I'll get back to you soon \
                     via SMS. This is an automated confirmation - please do not \
                     reply to this number.",
                    submission.name
                ),
            )
            .await
            .map_err(|e| DispatchError::Provider(e.to_string()))?;

            if let Some(admin_phone) = &config.admin_phone {
                sms.send(
                    admin_phone,
                    &config.twilio_from,
                    &format!(
                        "New SMS contact from {} ({}): {}",
                        submission.name, phone, submission.message
                    ),
                )
                .await
                .map_err(|e| DispatchError::Provider(e.to_string()))?;
            }
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Message sent successfully!",
        "method": submission.contact_method
    })))
}

#[actix_web::post("/api/email")]
async fn send_email(
    req: web::Json<SendEmailRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, DispatchError> {
    let AppState { config, email, .. } = &**app_state;
    let req = req.into_inner();

    let body = req
        .html
        .or(req.text)
        .filter(|b| !b.trim().is_empty())
        .ok_or(DispatchError::MissingEmailContent)?;
    if req.to.trim().is_empty() || req.subject.trim().is_empty() {
        return Err(DispatchError::MissingEmailContent);
    }

    let from = req
        .from
        .unwrap_or_else(|| config.sendgrid_from_email.clone());

    email
        .send(&req.to, &from, &req.subject, &body)
        .await
        .map_err(|e| DispatchError::Provider(e.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Email sent successfully"
    })))
}

#[actix_web::post("/api/sms")]
async fn send_sms(
    req: web::Json<SendSmsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, DispatchError> {
    let AppState { config, sms, .. } = &**app_state;
    let req = req.into_inner();

    if req.phone_number.trim().is_empty() || req.message.trim().is_empty() {
        return Err(DispatchError::MissingSmsFields);
    }

    sms.send(&req.phone_number, &config.twilio_from, &req.message)
        .await
        .map_err(|e| DispatchError::Provider(e.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[actix_web::get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// A body that fails to deserialize is a client error, not a server one, and
// the caller expects a JSON error envelope.
fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": "Missing required fields" })),
        )
        .into()
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting the contact dispatch service");
    let config = Config::from_env().expect("Missing required environment variables");

    // One configured client per provider, built once and shared.
    let email: Arc<dyn EmailSender> = Arc::new(SendgridClient::new(config.sendgrid_api_key.clone()));
    let sms: Arc<dyn SmsSender> = Arc::new(TwilioClient::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
    ));

    let server_address = config.server_address();
    let app_state = web::Data::new(AppState { config, email, sms });

    info!("Starting HTTP server on {}", server_address);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(json_error_config())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(health_check)
            .service(contact)
            .service(send_email)
            .service(send_sms)
    })
    .bind(server_address)?
    .run()
    .await
}
