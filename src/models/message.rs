//! Contact-form message model.

use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ContactMessage {
    /// Unique identifier assigned by the record store
    pub id: i64,

    /// Sender name
    pub name: String,

    /// Sender email
    pub email: String,

    /// Sender phone in canonical `+261...` form, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Message subject
    pub subject: String,

    /// Message body
    pub message: String,

    /// Whether an administrator has read the message
    #[serde(default)]
    pub read: bool,

    /// When the message was submitted (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Insert payload for a new contact message.
#[derive(Debug, Clone, Serialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub read: bool,
}

impl From<&ContactMessage> for NewContactMessage {
    fn from(message: &ContactMessage) -> Self {
        Self {
            name: message.name.clone(),
            email: message.email.clone(),
            phone: message.phone.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            read: false,
        }
    }
}
