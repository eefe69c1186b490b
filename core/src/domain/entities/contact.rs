//! Contact message entity.
//!
//! Messages are written by the public site's contact form; the dashboard
//! only lists, flags, and deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message submitted through the public contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Unique identifier
    pub id: Uuid,

    /// Sender name
    pub name: String,

    /// Sender email address
    pub email: String,

    /// Optional subject line
    pub subject: Option<String>,

    /// Message body
    pub message: String,

    /// Whether an administrator has read the message
    pub read: bool,

    /// Timestamp when the message was received
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: String, email: String, subject: Option<String>, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            subject,
            message,
            read: false,
            created_at: Utc::now(),
        }
    }
}
