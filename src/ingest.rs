//! Multi-file ingestion.
//!
//! Archive exports unpack to several TXT files (one per chat, media
//! sidecars excluded upstream). Ingestion parses each source independently,
//! concatenates whatever parsed, and carries the names of the sources that
//! yielded nothing. Partial failure is tolerated: the run errors only when
//! *no* source produced a single message.
//!
//! Archive extraction itself, encoding detection, and size limits are a
//! file-acquisition concern and happen upstream; this module only ever sees
//! decoded text (or paths to plain UTF-8 files).
//!
//! # Example
//!
//! ```
//! use chatlens::ingest::{SourceText, ingest_texts};
//!
//! let report = ingest_texts(vec![
//!     SourceText::new("good.txt", "14/12/20, 15:30 - Alice: Hello"),
//!     SourceText::new("noise.txt", "not an export"),
//! ])?;
//!
//! assert_eq!(report.messages.len(), 1);
//! assert_eq!(report.failed_files, vec!["noise.txt".to_string()]);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::Message;
use crate::error::{ChatlensError, Result};
use crate::parser::ExportParser;

/// A named blob of decoded export text.
#[derive(Debug, Clone)]
pub struct SourceText {
    /// Display name for failure reporting, typically the file name.
    pub name: String,
    /// The decoded export text.
    pub text: String,
}

impl SourceText {
    /// Creates a named source.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// The outcome of an ingestion run.
///
/// Messages are concatenated in source order: all messages of the first
/// successful source, then the second, and so on.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// All parsed messages across successful sources.
    pub messages: Vec<Message>,
    /// How many sources yielded at least one message.
    pub parsed_files: usize,
    /// Names of sources that could not be read or parsed to zero messages,
    /// in attempt order.
    pub failed_files: Vec<String>,
}

impl IngestReport {
    /// Returns `true` if any source failed.
    pub fn has_failures(&self) -> bool {
        !self.failed_files.is_empty()
    }

    /// Renders the failed-source list as a bounded summary.
    ///
    /// At most `limit` names are spelled out; the rest collapse into a
    /// `+N more` suffix. Returns `None` when nothing failed.
    ///
    /// # Example
    ///
    /// ```
    /// use chatlens::ingest::IngestReport;
    ///
    /// let report = IngestReport {
    ///     failed_files: vec!["a.txt".into(), "b.txt".into(), "c.txt".into()],
    ///     ..IngestReport::default()
    /// };
    /// assert_eq!(report.failure_summary(2).unwrap(), "a.txt, b.txt +1 more");
    /// ```
    pub fn failure_summary(&self, limit: usize) -> Option<String> {
        if self.failed_files.is_empty() {
            return None;
        }

        let shown = self.failed_files[..self.failed_files.len().min(limit)].join(", ");
        let hidden = self.failed_files.len().saturating_sub(limit);
        if hidden > 0 {
            Some(format!("{shown} +{hidden} more"))
        } else {
            Some(shown)
        }
    }
}

/// Parses several decoded texts into one combined message list.
///
/// A source fails when it parses to zero messages. Succeeds as long as at
/// least one source yields at least one message.
///
/// # Errors
///
/// Returns [`ChatlensError::NoMessages`] when every source failed.
pub fn ingest_texts<I>(sources: I) -> Result<IngestReport>
where
    I: IntoIterator<Item = SourceText>,
{
    let parser = ExportParser::new();
    let mut report = IngestReport::default();
    let mut attempted = 0usize;

    for source in sources {
        attempted += 1;
        let messages = parser.parse_str(&source.text);
        if messages.is_empty() {
            warn!(file = %source.name, "source parsed to zero messages");
            report.failed_files.push(source.name);
        } else {
            debug!(file = %source.name, count = messages.len(), "source parsed");
            report.parsed_files += 1;
            report.messages.extend(messages);
        }
    }

    if report.messages.is_empty() {
        return Err(ChatlensError::no_messages(attempted));
    }
    Ok(report)
}

/// Reads and parses several files from disk into one combined message list.
///
/// An unreadable file is a per-file failure, not an abort; it joins the
/// failed list alongside files that parsed to nothing.
///
/// # Errors
///
/// Returns [`ChatlensError::NoMessages`] when every file failed.
pub fn ingest_paths<P: AsRef<Path>>(paths: &[P]) -> Result<IngestReport> {
    let parser = ExportParser::new();
    let mut report = IngestReport::default();

    for path in paths {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        let messages = match fs::read_to_string(path) {
            Ok(text) => parser.parse_str(&text),
            Err(err) => {
                warn!(file = %name, error = %err, "source could not be read");
                report.failed_files.push(name);
                continue;
            }
        };

        if messages.is_empty() {
            warn!(file = %name, "source parsed to zero messages");
            report.failed_files.push(name);
        } else {
            debug!(file = %name, count = messages.len(), "source parsed");
            report.parsed_files += 1;
            report.messages.extend(messages);
        }
    }

    if report.messages.is_empty() {
        return Err(ChatlensError::no_messages(paths.len()));
    }
    Ok(report)
}
