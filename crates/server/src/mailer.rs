//! Outbound email. The contact pipeline only needs "send one plain-text
//! message", so that is the whole trait; the SMTP transport behind it can
//! be swapped without touching validation or response handling.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

use crate::config::AppConfig;

/// One plain-text message, fully addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Display name shown as the sender.
    pub from_name: String,
    /// Recipient address.
    pub to: String,
    /// Address replies should go to.
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Minimal send capability. Implementations may block; callers run them on
/// a blocking-friendly thread.
pub trait Mailer: Send + Sync {
    fn send_plain(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// SMTP-relay mailer. The authenticated account is always the envelope
/// sender; the submitter only appears as display name and reply-to.
pub struct SmtpMailer {
    transport: SmtpTransport,
    from_address: String,
}

impl SmtpMailer {
    pub fn from_config(config: &AppConfig) -> Result<Self, MailError> {
        let transport = SmtpTransport::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();
        Ok(Self {
            transport,
            from_address: config.smtp_user.clone(),
        })
    }
}

impl Mailer for SmtpMailer {
    fn send_plain(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(Mailbox::new(
                Some(email.from_name.clone()),
                self.from_address.parse()?,
            ))
            .to(email.to.parse()?)
            .reply_to(email.reply_to.parse()?)
            .subject(&email.subject)
            .body(email.body.clone())?;

        self.transport.send(&message)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::*;

    /// Records every message instead of sending it.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<OutboundEmail>>,
    }

    impl Mailer for RecordingMailer {
        fn send_plain(&self, email: &OutboundEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    /// Fails every send with a transport-shaped error.
    pub struct FailingMailer;

    impl Mailer for FailingMailer {
        fn send_plain(&self, _email: &OutboundEmail) -> Result<(), MailError> {
            Err(MailError::Address(
                "not an address".parse::<lettre::Address>().unwrap_err(),
            ))
        }
    }
}
