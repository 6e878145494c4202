//! Filter messages by date range and author subset.
//!
//! The UI collaborator owns the filter *state* (its date pickers and
//! participant dropdown); this module owns filter *application*. Statistics
//! are recomputed wholesale on every filter change, so filtering is a plain
//! pass over the message list, no incremental bookkeeping.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date (start of day) |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date (end of day) |
//! | Authors | [`with_author`](FilterConfig::with_author) | Messages from the selected authors |
//!
//! # Examples
//!
//! ```
//! use chatlens::filter::{FilterConfig, apply_filters};
//! use chatlens::Message;
//!
//! let messages = vec![
//!     Message::new("Alice", "Hello"),
//!     Message::new("Bob", "Hi there"),
//!     Message::new("Alice", "How are you?"),
//! ];
//!
//! let config = FilterConfig::new().with_author("Alice");
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - Messages without timestamps are **excluded** when date filters are active
//! - An empty author set means "all authors"; matching is exact
//! - Multiple filters are combined with AND logic

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::Message;
use crate::error::ChatlensError;

/// Configuration for filtering messages by date range and author subset.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatlens::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let config = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?
///     .with_author("Alice");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages at or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Include only messages at or before this instant.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from these authors. Empty means all.
    pub authors: HashSet<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, start of day).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let naive = parse_filter_date(date_str)?;
        self.after = naive.and_hms_opt(0, 0, 0);
        Ok(self)
    }

    /// Sets the end date filter (inclusive, end of day).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let naive = parse_filter_date(date_str)?;
        // End of the day to include the full day
        self.before = naive.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    /// Adds an author to the selected set.
    ///
    /// Matching is exact; author labels come from the parsed messages
    /// themselves, so there is nothing to normalize against.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.insert(author.into());
        self
    }

    /// Adds several authors to the selected set.
    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors.extend(authors.into_iter().map(Into::into));
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || !self.authors.is_empty()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the author filter is active.
    pub fn has_author_filter(&self) -> bool {
        !self.authors.is_empty()
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns a new vector containing only messages that match all active
/// filters. If no filters are active, returns the original messages
/// unchanged.
///
/// # Examples
///
/// ```
/// use chatlens::filter::{FilterConfig, apply_filters};
/// use chatlens::Message;
///
/// let messages = vec![
///     Message::new("Alice", "Hello"),
///     Message::new("Bob", "Hi"),
/// ];
///
/// let config = FilterConfig::new().with_author("Bob");
/// let filtered = apply_filters(messages, &config);
///
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].author(), "Bob");
/// ```
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| {
            if config.has_author_filter() && !config.authors.contains(&msg.author) {
                return false;
            }

            if config.has_date_filter() {
                match msg.timestamp {
                    Some(ts) => {
                        if config.after.is_some_and(|after| ts < after) {
                            return false;
                        }
                        if config.before.is_some_and(|before| ts > before) {
                            return false;
                        }
                    }
                    None => {
                        // No timestamp - exclude from date-filtered results
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}
