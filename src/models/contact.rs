use serde::Deserialize;

/// Placeholder rendered when a submission carries no subject.
pub const SUBJECT_PLACEHOLDER: &str = "—";

pub const REQUIRED_FIELDS_ERROR: &str = "Name, email and message are required";

/// Raw contact form payload. Every key is optional on the wire; a request
/// with no body at all deserializes to the all-`None` default.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A contact form submission that passed the presence checks. Field values
/// are already trimmed; `subject` is `None` when absent or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Trims all fields and enforces the only validation rule the form has:
    /// name, email and message must be non-empty. Email format is not checked.
    /// Failure returns the caller-facing error string for the 400 response.
    pub fn into_submission(self) -> Result<ContactSubmission, String> {
        let name = trimmed(self.name);
        let email = trimmed(self.email);
        let subject = trimmed(self.subject);
        let message = trimmed(self.message);

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(REQUIRED_FIELDS_ERROR.to_string());
        }

        Ok(ContactSubmission {
            name,
            email,
            subject: (!subject.is_empty()).then_some(subject),
            message,
        })
    }
}

fn trimmed(field: Option<String>) -> String {
    field.as_deref().unwrap_or_default().trim().to_string()
}

impl ContactSubmission {
    /// Formats the Telegram notification body. HTML parse mode, so the labels
    /// are bold; the field values are passed through as the form sent them.
    pub fn notification_text(&self) -> String {
        format!(
            "<b>New contact from Portfolio</b>\n\n\
             <b>Name:</b> {}\n\
             <b>Email:</b> {}\n\
             <b>Subject:</b> {}\n\n\
             <b>Message:</b>\n{}",
            self.name,
            self.email,
            self.subject.as_deref().unwrap_or(SUBJECT_PLACEHOLDER),
            self.message,
        )
    }
}
