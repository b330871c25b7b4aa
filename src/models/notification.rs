//! User notification record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An informational message for a user.
///
/// Emitted by the accrual processor when a monthly accrual lands. Delivery
/// is best-effort; a failed insert is logged and never fails the accrual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: Uuid,
    /// The user the message is addressed to.
    pub user_id: String,
    /// Human-readable message body.
    pub message: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a new notification for a user.
    pub fn new(user_id: impl Into<String>, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Notification {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            message: message.into(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_fields() {
        let now = Utc::now();
        let note = Notification::new("user_001", "Leave accrued", now);
        assert_eq!(note.user_id, "user_001");
        assert_eq!(note.message, "Leave accrued");
        assert_eq!(note.created_at, now);
    }
}
