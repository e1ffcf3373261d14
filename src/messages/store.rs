//! Message log persistence.
//!
//! The log line format is `userId,timestamp,senderLabel,text`. Only
//! the first three delimiters are structural; everything after them is
//! the raw message text and may itself contain commas, so rows are
//! split with `splitn` instead of a quote-aware reader. There is no
//! header row.

use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use super::model::Message;
use crate::constants::MESSAGES_FILE;
use crate::errors::Result;

/// Fields split out of each log line before the free-text remainder.
const STRUCTURAL_FIELDS: usize = 4;

/// Reads and appends the append-only message log.
///
/// Appends are serialized behind an internal lock so one store
/// instance can be shared across request threads without interleaving
/// lines.
pub struct MessageStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl MessageStore {
    /// Creates a store over `<data_dir>/messages.csv`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(MESSAGES_FILE),
            append_lock: Mutex::new(()),
        }
    }

    /// All messages of one user, in append order.
    ///
    /// Rows with fewer than four structural fields are skipped. A
    /// missing log file just means nobody has messaged yet.
    pub fn load_for_user(&self, user_id: &str) -> Result<Vec<Message>> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut messages = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let parts: Vec<&str> = line.splitn(STRUCTURAL_FIELDS, ',').collect();
            if parts.len() < STRUCTURAL_FIELDS {
                if !line.trim().is_empty() {
                    warn!(
                        "Skipping malformed message log line {} in {}",
                        line_no + 1,
                        self.path.display()
                    );
                }
                continue;
            }
            if parts[0].trim() != user_id {
                continue;
            }
            messages.push(Message::new(
                parts[0].trim(),
                parts[1].trim(),
                parts[2].trim(),
                parts[3].trim(),
            ));
        }
        Ok(messages)
    }

    /// Appends one message to the log, creating parent directories on
    /// first use. An I/O failure surfaces to the caller and the
    /// message is not recorded; there is no retry.
    pub fn append(&self, message: &Message) -> Result<()> {
        let _guard = self.append_lock.lock().unwrap();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{},{},{},{}",
            message.user_id, message.timestamp, message.sender_label, message.text
        )?;

        debug!("Appended message for user {}", message.user_id);
        Ok(())
    }
}
