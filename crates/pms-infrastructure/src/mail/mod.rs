//! Mail module (SMTP adapter)

pub mod smtp;

pub use smtp::SmtpMailer;
