pub mod email;
pub mod sender;
pub mod sms;

pub use email::SendgridClient;
pub use sender::{EmailSender, SmsSender};
pub use sms::TwilioClient;
