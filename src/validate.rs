//! Form input validation.
//!
//! Every check runs on every submission, so a form can flag all of its bad
//! fields at once. Error `Display` strings are the exact messages shown next
//! to the offending field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A newsletter field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("You must agree to receive emails to subscribe.")]
    ConsentRequired,
}

/// A contact form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please enter a subject.")]
    MissingSubject,
    #[error("Please enter a message.")]
    MissingMessage,
}

/// Trimmed, validated newsletter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub email: String,
}

/// Trimmed, validated contact input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub subject: String,
    pub message: String,
}

/// The trimmed value, or `None` when nothing but whitespace was entered.
#[must_use]
pub fn required(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Whether `email` has the shape `local@domain.tld`.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with a
/// dot that has at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate newsletter input.
///
/// # Errors
///
/// Returns every failing field, in form order.
pub fn validate_signup(name: &str, email: &str, consented: bool) -> Result<Signup, Vec<SignupError>> {
    let mut errors = Vec::new();
    let name = required(name);
    if name.is_none() {
        errors.push(SignupError::MissingName);
    }
    let email = required(email).filter(|e| is_valid_email(e));
    if email.is_none() {
        errors.push(SignupError::InvalidEmail);
    }
    if !consented {
        errors.push(SignupError::ConsentRequired);
    }
    match (name, email) {
        (Some(name), Some(email)) if errors.is_empty() => {
            Ok(Signup { name: name.to_owned(), email: email.to_owned() })
        }
        _ => Err(errors),
    }
}

/// Validate contact input.
///
/// # Errors
///
/// Returns every failing field, in form order.
pub fn validate_contact(subject: &str, message: &str) -> Result<Contact, Vec<ContactError>> {
    let subject = required(subject);
    let message = required(message);
    match (subject, message) {
        (Some(subject), Some(message)) => Ok(Contact { subject: subject.to_owned(), message: message.to_owned() }),
        _ => {
            let mut errors = Vec::new();
            if subject.is_none() {
                errors.push(ContactError::MissingSubject);
            }
            if message.is_none() {
                errors.push(ContactError::MissingMessage);
            }
            Err(errors)
        }
    }
}
