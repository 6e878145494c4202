//! The message type produced by the export parser.
//!
//! This module provides [`Message`], the structured representation of a single
//! chat message reconstructed from an export. The parser emits messages in
//! source order; the stats engine consumes them without ever mutating them.
//!
//! # Overview
//!
//! A message consists of:
//! - **Required**: `author` and `content`
//! - **Derived**: `timestamp` (from the header's date and time fields) and
//!   `is_multimedia` (content matched a multimedia placeholder)
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello, world!");
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.content(), "Hello, world!");
//! assert!(!msg.is_multimedia());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single chat message reconstructed from an export.
///
/// Messages are plain immutable data: created during parse, handed across the
/// output boundary as-is. Timestamps are naive local time — exports carry no
/// timezone information.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `author` | `String` | Label preceding the first colon of the header line |
/// | `content` | `String` | Header tail plus continuation lines, newline-joined |
/// | `timestamp` | `Option<NaiveDateTime>` | When the message was sent (naive local) |
/// | `is_multimedia` | `bool` | Content matched a multimedia placeholder |
///
/// The author is free text: it may contain spaces, phone numbers, or emoji,
/// and is never validated against a participant roster. A `timestamp` of
/// `None` means the header carried out-of-range date or time components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name or phone number of the message author.
    pub author: String,

    /// Text content of the message.
    ///
    /// May contain newlines when the original message spanned multiple
    /// physical lines. May be empty, but is never `None`.
    pub content: String,

    /// When the message was sent, in naive local time.
    ///
    /// `None` when the header's date or time components were out of range
    /// (e.g. month 13); such input is accepted, not rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Whether the content is a multimedia placeholder such as
    /// `<Media omitted>` or one of its localized variants.
    #[serde(default)]
    pub is_multimedia: bool,
}

impl Message {
    /// Creates a new message with only author and content.
    ///
    /// The timestamp is `None` and the multimedia flag is `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::Message;
    ///
    /// let msg = Message::new("Alice", "Hello!");
    /// assert!(msg.timestamp().is_none());
    /// ```
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            timestamp: None,
            is_multimedia: false,
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Builder method to set the multimedia flag.
    #[must_use]
    pub fn with_multimedia(mut self, multimedia: bool) -> Self {
        self.is_multimedia = multimedia;
        self
    }

    /// Returns the author label.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp, if the header parsed to a valid date.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns `true` if the content is a multimedia placeholder.
    pub fn is_multimedia(&self) -> bool {
        self.is_multimedia
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new("", "")
    }
}
