//! Contact-form service.
//!
//! Checks that the required fields are present and forwards the message by
//! email through Resend. Without mail configuration the message is logged.

use portfolio::state::contact::ContactDraft;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::MailerConfig;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact.html");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Where an accepted message went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Emailed,
    Logged,
}

/// Trim every field and require name, email, and message.
///
/// # Errors
///
/// Returns `MissingField` naming the first blank required field.
pub fn normalize(draft: &ContactDraft) -> Result<ContactDraft, ContactError> {
    let normalized = ContactDraft {
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        subject: draft.subject.trim().to_owned(),
        message: draft.message.trim().to_owned(),
    };
    for (field, value) in [("name", &normalized.name), ("email", &normalized.email), ("message", &normalized.message)] {
        if value.is_empty() {
            return Err(ContactError::MissingField(field));
        }
    }
    Ok(normalized)
}

#[must_use]
pub fn subject_line(draft: &ContactDraft) -> String {
    if draft.subject.is_empty() {
        format!("Portfolio contact from {}", draft.name)
    } else {
        format!("Portfolio contact: {}", draft.subject)
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fill the email template in a single pass over its text, so substituted
/// values are never scanned for placeholders.
#[must_use]
pub fn render_contact_template(draft: &ContactDraft) -> String {
    let mut out = String::with_capacity(CONTACT_TEMPLATE.len() + draft.message.len());
    let mut rest = CONTACT_TEMPLATE;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        match &after[..end] {
            "NAME" => out.push_str(&escape_html(&draft.name)),
            "EMAIL" => out.push_str(&escape_html(&draft.email)),
            "SUBJECT" => out.push_str(&escape_html(&subject_line(draft))),
            "MESSAGE" => out.push_str(&escape_html(&draft.message)),
            other => {
                out.push_str("{{");
                out.push_str(other);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Forward a normalized message.
///
/// # Errors
///
/// Returns `Delivery` if Resend rejects the email.
pub async fn deliver(mailer: Option<&MailerConfig>, draft: &ContactDraft) -> Result<Delivery, ContactError> {
    let Some(mailer) = mailer else {
        tracing::info!(
            name = %draft.name,
            email = %draft.email,
            subject = %subject_line(draft),
            "contact message received (mail forwarding disabled)"
        );
        return Ok(Delivery::Logged);
    };

    let resend = Resend::new(&mailer.api_key);
    let to = [mailer.to.as_str()];
    let html = render_contact_template(draft);
    let email = CreateEmailBaseOptions::new(&mailer.from, to, subject_line(draft)).with_html(&html);
    resend
        .emails
        .send(email)
        .await
        .map_err(|e| ContactError::Delivery(e.to_string()))?;
    Ok(Delivery::Emailed)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
