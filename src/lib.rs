//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and deriving the
//! aggregate statistics behind chat insight dashboards.
//!
//! ## Overview
//!
//! Chatlens has two components, consumed in sequence:
//!
//! - **Parser** — a tolerant line-oriented parser that reconstructs
//!   structured messages (author, timestamp, content, multimedia flag) from
//!   the two textual export layouts WhatsApp produces (iOS bracketed,
//!   Android dashed), including multi-line continuations and locale quirks.
//! - **Stats engine** — a single pass over a (possibly filtered) message
//!   list computing message totals, temporal distributions, author rankings,
//!   content signals (emoji, laughter, links, questions) and the longest
//!   same-author streak, all as chart-ready series.
//!
//! Everything in between — date/author filtering and multi-file ingestion —
//! is provided as thin supporting modules. Chart rendering, file
//! acquisition, and archive extraction belong to the consuming application.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let export = "14/12/20, 15:30 - Ana: Hola!\n\
//!               14/12/20, 15:31 - Luis: jajaja\n\
//!               14/12/20, 15:32 - Ana: <Media omitted>";
//!
//! let messages = parse(export);
//! assert_eq!(messages.len(), 3);
//!
//! let stats = calculate_stats(&messages).expect("chat is not empty");
//! assert_eq!(stats.total_messages, 2); // media placeholder excluded
//! assert_eq!(stats.unique_authors, 2);
//! ```
//!
//! ## Filtering
//!
//! Statistics are a pure function of their input, so a date range or
//! participant selection is just a narrower message list:
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! # fn main() -> chatlens::Result<()> {
//! let messages = parse("14/12/20, 15:30 - Ana: Hola!");
//! let config = FilterConfig::new()
//!     .with_date_from("2020-12-01")?
//!     .with_author("Ana");
//! let filtered = apply_filters(messages, &config);
//! let stats = calculate_stats(&filtered);
//! # let _ = stats;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — export text to `Vec<Message>`; never fails, empty means
//!   "not a recognizable export"
//! - [`stats`] — `Vec<Message>` to [`StatsResult`](stats::StatsResult);
//!   `None` means "no data"
//! - [`filter`] — [`FilterConfig`](filter::FilterConfig) and
//!   [`apply_filters`](filter::apply_filters)
//! - [`ingest`] — multi-file ingestion with bounded failure reporting
//! - [`patterns`] — the compiled regex table behind both components
//! - [`message`] — the [`Message`] record
//! - [`error`] — [`ChatlensError`] and [`Result`]

pub mod error;
pub mod filter;
pub mod ingest;
pub mod message;
pub mod parser;
pub mod patterns;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ExportParser, parse};

    // Statistics
    pub use crate::stats::{Series, StatsEngine, StatsResult, Streak, calculate_stats};

    // Filtering
    pub use crate::filter::{FilterConfig, apply_filters};

    // Ingestion
    pub use crate::ingest::{IngestReport, SourceText, ingest_paths, ingest_texts};
}
