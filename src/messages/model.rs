//! Message domain model.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One entry of the append-only message log.
///
/// `user_id` names the client or advisor the message belongs to, and
/// `timestamp` is a display string taken verbatim from the log; it is
/// never parsed or compared, the file's append order is the
/// chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub user_id: String,
    pub timestamp: String,
    pub sender_label: String,
    pub text: String,
}

impl Message {
    pub fn new(
        user_id: impl Into<String>,
        timestamp: impl Into<String>,
        sender_label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp: timestamp.into(),
            sender_label: sender_label.into(),
            text: text.into(),
        }
    }

    /// A message stamped with the current local time.
    pub fn now(
        user_id: impl Into<String>,
        sender_label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            user_id,
            Local::now().naive_local().to_string(),
            sender_label,
            text,
        )
    }
}
