//! The contact pipeline: validate a submission, relay it as one outbound
//! email, and report a user-facing result. Transport failures never leak
//! past this boundary; they are logged and turned into a generic message.

use serde::{Deserialize, Serialize};

use crate::mailer::{Mailer, OutboundEmail};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    fn success() -> Self {
        Self {
            success: true,
            message: "Message sent successfully!".to_string(),
        }
    }

    fn incomplete() -> Self {
        Self {
            success: false,
            message: "Please fill in all fields.".to_string(),
        }
    }

    pub(crate) fn failed() -> Self {
        Self {
            success: false,
            message: "Failed to send email. Please try again.".to_string(),
        }
    }
}

/// Process one submission. All four fields are required; an incomplete form
/// is rejected without touching the transport. The submitter's address is
/// set as reply-to and the configured operator address as the recipient.
pub fn process_contact(
    form: &ContactForm,
    mailer: &dyn Mailer,
    site_name: &str,
    operator_email: &str,
) -> ContactResponse {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.subject.trim().is_empty()
        || form.message.trim().is_empty()
    {
        return ContactResponse::incomplete();
    }

    let email = OutboundEmail {
        from_name: form.name.clone(),
        to: operator_email.to_string(),
        reply_to: form.email.clone(),
        subject: format!("Email from {site_name} - {}", form.subject),
        body: format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}",
            form.name, form.email, form.subject, form.message
        ),
    };

    match mailer.send_plain(&email) {
        Ok(()) => ContactResponse::success(),
        Err(err) => {
            tracing::error!(error = %err, "contact email delivery failed");
            ContactResponse::failed()
        }
    }
}
