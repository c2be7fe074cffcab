//! Records appended to the browser-local audit lists.

use serde::{Deserialize, Serialize};

/// One newsletter signup, stored under [`crate::consts::SUBSCRIBERS_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub name: String,
    pub email: String,
    /// ISO-8601 submission time.
    pub ts: String,
}

/// One contact form submission, stored under [`crate::consts::CONTACT_MESSAGES_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub subject: String,
    pub message: String,
    /// ISO-8601 submission time.
    pub ts: String,
}
