//! Aggregate result types.
//!
//! One explicit struct per shape: [`StatsResult`] is the whole aggregate,
//! [`Series`] is one chart-ready label/value pairing, [`Streak`] is the
//! longest same-author run. No dynamic property bags; every series the UI
//! renders has a named field here.

use chrono::NaiveDateTime;
use serde::Serialize;

/// One chart-ready data series: a label list and a value list of equal
/// length.
///
/// Per-author series share the top-authors label ordering so charts line up
/// on a common author axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Series {
    /// Axis labels, one per value.
    pub labels: Vec<String>,
    /// Values, one per label.
    pub values: Vec<u64>,
}

impl Series {
    /// Creates a series from matching label and value lists.
    pub fn new(labels: Vec<String>, values: Vec<u64>) -> Self {
        Self { labels, values }
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no data points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if labels and values line up.
    pub fn is_well_formed(&self) -> bool {
        self.labels.len() == self.values.len()
    }
}

/// The longest unbroken run of consecutive messages by one author.
///
/// Runs are counted over valid (non-deleted, non-multimedia) messages in
/// input order. Ties go to the first-encountered run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streak {
    /// Who held the run.
    pub author: String,
    /// How many consecutive messages.
    pub count: u64,
    /// Timestamp of the first message in the run.
    pub start_timestamp: Option<NaiveDateTime>,
    /// Timestamp of the last message in the run.
    pub end_timestamp: Option<NaiveDateTime>,
    /// Content of the first message in the run.
    pub start_message: String,
    /// Content of the last message in the run.
    pub end_message: String,
}

/// Aggregate statistics for one analysis pass.
///
/// A pure value: recomputed from scratch on every filter change, owned by
/// whoever triggered the computation. The engine keeps no reference to the
/// message list it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResult {
    /// Count of valid (non-deleted, non-multimedia) messages.
    pub total_messages: u64,
    /// Distinct authors with at least one valid message.
    pub unique_authors: usize,
    /// Distinct calendar dates with activity. Multimedia messages count;
    /// deleted messages do not.
    pub days_active: usize,
    /// Longest same-author run, if any valid message existed.
    pub historic_streak: Option<Streak>,

    /// Top-10 authors by valid message count.
    pub authors: Series,
    /// Activity per quarter, chronological ("Q1 2024", ...).
    pub timeline: Series,
    /// Activity per hour of day, 24 buckets.
    pub hourly: Series,
    /// Activity per day of week, Monday first.
    pub day_of_week: Series,
    /// Top-5 emoji by frequency.
    pub emoji: Series,
    /// Multimedia messages per top author.
    pub media: Series,
    /// Laughter messages per top author.
    pub laughter: Series,
    /// Conversation starts per top author.
    pub starters: Series,
    /// Average message length (chars, rounded) per top author.
    pub avg_length: Series,
    /// Weekday vs weekend activity, 2 buckets.
    pub weekend: Series,
    /// Link-bearing messages per top author.
    pub links: Series,
    /// Question-bearing messages per top author.
    pub questions: Series,
    /// Total words per top author.
    pub words: Series,
    /// Activity per calendar month, 12 buckets.
    pub seasonality: Series,
}

impl StatsResult {
    /// All chart series with their field names, for structural checks and
    /// generic rendering.
    pub fn series(&self) -> [(&'static str, &Series); 14] {
        [
            ("authors", &self.authors),
            ("timeline", &self.timeline),
            ("hourly", &self.hourly),
            ("day_of_week", &self.day_of_week),
            ("emoji", &self.emoji),
            ("media", &self.media),
            ("laughter", &self.laughter),
            ("starters", &self.starters),
            ("avg_length", &self.avg_length),
            ("weekend", &self.weekend),
            ("links", &self.links),
            ("questions", &self.questions),
            ("words", &self.words),
            ("seasonality", &self.seasonality),
        ]
    }
}
