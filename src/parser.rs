//! WhatsApp TXT export parser.
//!
//! Exports vary by platform. This parser accepts both documented layouts on
//! a per-line basis, no format auto-detection pass needed:
//!
//! - iOS: `[14/12/20, 15:30:12] Sender: Message`
//! - Android: `14/12/20, 15:30 - Sender: Message`
//!
//! Date separators may be `/`, `.`, or `-` interchangeably; years may be 2 or
//! 4 digits. Dates are always read day-month-year. Lines that match neither
//! header continue the previous message (exports line-wrap long messages), or
//! are dropped when nothing is in progress (encryption banners, preamble).
//!
//! Parsing never fails: a text with no recognizable headers yields an empty
//! vector, which callers treat as "not a chat export".
//!
//! # Example
//!
//! ```
//! use chatlens::parser::ExportParser;
//!
//! let parser = ExportParser::new();
//! let messages = parser.parse_str("14/12/20, 15:30 - Alice: Hello");
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].author(), "Alice");
//! ```

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::Message;
use crate::patterns::Patterns;

/// Parser for WhatsApp TXT exports.
///
/// Owns the compiled pattern table; construct once and reuse across files.
/// For one-off use, [`parse`] is a convenience wrapper.
#[derive(Debug, Default)]
pub struct ExportParser {
    patterns: Patterns,
}

impl ExportParser {
    /// Creates a new parser with a freshly compiled pattern table.
    pub fn new() -> Self {
        Self {
            patterns: Patterns::new(),
        }
    }

    /// Parses export text into messages, in source order.
    ///
    /// Chronological order is preserved as encountered, never verified.
    /// Returns an empty vector when no line matches a header format.
    pub fn parse_str(&self, text: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();
        let mut current: Option<Message> = None;

        for raw_line in text.split('\n') {
            let line = strip_direction_marks(raw_line);

            let caps = self
                .patterns
                .ios_header
                .captures(&line)
                .or_else(|| self.patterns.android_header.captures(&line));

            if let Some(caps) = caps {
                // New message starts; flush the one in progress.
                if let Some(done) = current.take() {
                    messages.push(done);
                }

                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let author = caps.get(3).map_or("", |m| m.as_str());
                let content = caps.get(4).map_or("", |m| m.as_str()).trim();

                let mut msg = Message::new(author, content)
                    .with_multimedia(self.patterns.multimedia.is_match(content));
                msg.timestamp = parse_timestamp(date_str, time_str);
                current = Some(msg);
            } else if let Some(msg) = current.as_mut() {
                // Continuation of a multiline message.
                msg.content.push('\n');
                msg.content.push_str(line.trim());
            }
            // No header and nothing in progress: preamble or banner, dropped.
        }

        if let Some(done) = current.take() {
            messages.push(done);
        }

        debug!(count = messages.len(), "parsed export text");
        messages
    }
}

/// Parses export text with a throwaway parser.
///
/// Equivalent to `ExportParser::new().parse_str(text)`.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse;
///
/// assert!(parse("").is_empty());
/// assert!(parse("no headers anywhere").is_empty());
/// ```
pub fn parse(text: &str) -> Vec<Message> {
    ExportParser::new().parse_str(text)
}

/// Strips the bidirectional control characters some exports embed
/// before dates (U+200E, U+200F).
fn strip_direction_marks(line: &str) -> Cow<'_, str> {
    if line.contains(['\u{200e}', '\u{200f}']) {
        Cow::Owned(line.replace(['\u{200e}', '\u{200f}'], ""))
    } else {
        Cow::Borrowed(line)
    }
}

/// Builds a naive local timestamp from the header's date and time strings.
///
/// The date is read day-month-year regardless of locale; 2-digit years mean
/// 2000+YY. Missing minute/second components default to 0. Out-of-range
/// components (month 13, hour 25) yield `None` rather than an error.
fn parse_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let normalized = date_str.replace(['-', '.'], "/");
    let mut date_parts = normalized.split('/');

    let day: u32 = date_parts.next()?.parse().ok()?;
    let month: u32 = date_parts.next()?.parse().ok()?;
    let mut year: i32 = date_parts.next()?.parse().ok()?;
    if year < 100 {
        year += 2000;
    }

    let mut time_parts = time_str.split(':');
    let hour: u32 = time_parts.next()?.parse().ok()?;
    let minute: u32 = time_parts.next().map_or(Ok(0), str::parse).ok()?;
    let second: u32 = time_parts.next().map_or(Ok(0), str::parse).ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}
