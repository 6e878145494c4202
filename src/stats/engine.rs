//! Single-pass aggregation engine.
//!
//! One iteration over the message list maintains every accumulator at once:
//! per-author counters, temporal buckets, the emoji frequency table, and the
//! running streak. All state is local to the call; each invocation starts
//! from fresh maps and hands back a plain value.
//!
//! Per-message rules, in order:
//! 1. Deleted messages are skipped entirely — they count nowhere.
//! 2. The message's calendar date registers as an active day (this happens
//!    before the multimedia short-circuit, so a media-only day still counts).
//! 3. Multimedia messages increment their author's media counter and nothing
//!    else.
//! 4. Everything remaining is a valid message and feeds every other metric.
//!
//! Streaks run over valid messages only: deleted and multimedia messages
//! neither extend nor break a run.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, TimeDelta, Timelike};
use tracing::debug;

use crate::Message;
use crate::patterns::Patterns;
use crate::stats::laughter::is_laughter_message;
use crate::stats::result::{Series, StatsResult, Streak};
use crate::stats::{
    DAY_LABELS, MONTH_LABELS, STARTER_GAP_HOURS, TOP_AUTHORS, TOP_EMOJIS, WEEKEND_LABELS,
};

/// Attribution label for messages whose header carried an empty author.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// The statistics engine.
///
/// Owns the compiled pattern table; construct once and reuse across filter
/// changes. For one-off use, [`calculate_stats`] is a convenience wrapper.
#[derive(Debug, Default)]
pub struct StatsEngine {
    patterns: Patterns,
}

impl StatsEngine {
    /// Creates a new engine with a freshly compiled pattern table.
    pub fn new() -> Self {
        Self {
            patterns: Patterns::new(),
        }
    }

    /// Computes aggregate statistics over a message list.
    ///
    /// Returns `None` for an empty input — "no data in range", not an
    /// error. The input is read once, in order, and never retained.
    pub fn calculate(&self, messages: &[Message]) -> Option<StatsResult> {
        if messages.is_empty() {
            return None;
        }

        let mut author_counts: HashMap<String, u64> = HashMap::new();
        let mut media_counts: HashMap<String, u64> = HashMap::new();
        let mut laughter_counts: HashMap<String, u64> = HashMap::new();
        let mut starter_counts: HashMap<String, u64> = HashMap::new();
        let mut link_counts: HashMap<String, u64> = HashMap::new();
        let mut question_counts: HashMap<String, u64> = HashMap::new();
        let mut word_counts: HashMap<String, u64> = HashMap::new();
        let mut length_sums: HashMap<String, u64> = HashMap::new();
        let mut emoji_counts: HashMap<String, u64> = HashMap::new();
        let mut quarter_counts: HashMap<String, u64> = HashMap::new();

        let mut hour_counts = [0u64; 24];
        let mut dow_counts = [0u64; 7];
        let mut month_counts = [0u64; 12];
        // index 0 = weekdays, 1 = weekends
        let mut weekend_counts = [0u64; 2];

        let mut active_days: HashSet<NaiveDate> = HashSet::new();
        let mut historic: Option<Streak> = None;
        let mut current: Option<Streak> = None;
        let mut last_msg_time = None;
        let mut valid_messages = 0u64;

        for msg in messages {
            let author = if msg.author.is_empty() {
                UNKNOWN_AUTHOR
            } else {
                msg.author.as_str()
            };
            let content = &msg.content;

            // Deleted messages count nowhere.
            if self.patterns.deleted.is_match(content) {
                continue;
            }

            // Date registration precedes the multimedia short-circuit.
            if let Some(ts) = msg.timestamp {
                active_days.insert(ts.date());
            }

            if msg.is_multimedia {
                *media_counts.entry(author.to_string()).or_default() += 1;
                continue;
            }

            valid_messages += 1;

            // Streak: extend on the same author, otherwise close and restart.
            match current.as_mut() {
                Some(run) if run.author == author => {
                    run.count += 1;
                    run.end_timestamp = msg.timestamp;
                    run.end_message = content.clone();
                }
                _ => {
                    if let Some(run) = current.take() {
                        if historic.as_ref().is_none_or(|best| run.count > best.count) {
                            historic = Some(run);
                        }
                    }
                    current = Some(Streak {
                        author: author.to_string(),
                        count: 1,
                        start_timestamp: msg.timestamp,
                        end_timestamp: msg.timestamp,
                        start_message: content.clone(),
                        end_message: content.clone(),
                    });
                }
            }

            *author_counts.entry(author.to_string()).or_default() += 1;

            if let Some(ts) = msg.timestamp {
                hour_counts[ts.hour() as usize] += 1;
                dow_counts[ts.weekday().num_days_from_monday() as usize] += 1;
                month_counts[ts.month0() as usize] += 1;

                let quarter = ts.month0() / 3 + 1;
                *quarter_counts
                    .entry(format!("{}-Q{}", ts.year(), quarter))
                    .or_default() += 1;

                let weekend = ts.weekday().num_days_from_monday() >= 5;
                weekend_counts[usize::from(weekend)] += 1;
            }

            if is_laughter_message(content) {
                *laughter_counts.entry(author.to_string()).or_default() += 1;
            }

            // Conversation starter: a long silence ended by this message.
            if let (Some(last), Some(ts)) = (last_msg_time, msg.timestamp) {
                if ts - last > TimeDelta::hours(STARTER_GAP_HOURS) {
                    *starter_counts.entry(author.to_string()).or_default() += 1;
                }
            }
            last_msg_time = msg.timestamp;

            *length_sums.entry(author.to_string()).or_default() += content.chars().count() as u64;
            *word_counts.entry(author.to_string()).or_default() +=
                content.split_whitespace().count() as u64;

            if content.contains("http://") || content.contains("https://") {
                *link_counts.entry(author.to_string()).or_default() += 1;
            }

            if content.contains('?') {
                *question_counts.entry(author.to_string()).or_default() += 1;
            }

            for found in self.patterns.emoji.find_iter(content) {
                *emoji_counts.entry(found.as_str().to_string()).or_default() += 1;
            }
        }

        // The last run is never closed by a mismatch.
        if let Some(run) = current.take() {
            if historic.as_ref().is_none_or(|best| run.count > best.count) {
                historic = Some(run);
            }
        }

        let top_authors = top_entries(&author_counts, TOP_AUTHORS);
        let top_emojis = top_entries(&emoji_counts, TOP_EMOJIS);

        let avg_length_values = top_authors
            .iter()
            .map(|(author, count)| {
                let sum = length_sums.get(author).copied().unwrap_or(0);
                let divisor = (*count).max(1);
                ((sum as f64) / (divisor as f64)).round() as u64
            })
            .collect();

        let mut quarter_keys: Vec<&String> = quarter_counts.keys().collect();
        quarter_keys.sort();
        let timeline = Series::new(
            quarter_keys
                .iter()
                .map(|key| quarter_label(key.as_str()))
                .collect(),
            quarter_keys
                .iter()
                .map(|key| quarter_counts[key.as_str()])
                .collect(),
        );

        debug!(
            total = valid_messages,
            authors = author_counts.len(),
            days = active_days.len(),
            "aggregation pass complete"
        );

        Some(StatsResult {
            total_messages: valid_messages,
            unique_authors: author_counts.len(),
            days_active: active_days.len(),
            historic_streak: historic,

            authors: Series::new(
                top_authors.iter().map(|(a, _)| a.clone()).collect(),
                top_authors.iter().map(|(_, count)| *count).collect(),
            ),
            timeline,
            hourly: Series::new(
                (0..24).map(|hour| format!("{hour}:00")).collect(),
                hour_counts.to_vec(),
            ),
            day_of_week: Series::new(
                DAY_LABELS.iter().map(|&label| label.to_string()).collect(),
                dow_counts.to_vec(),
            ),
            emoji: Series::new(
                top_emojis.iter().map(|(e, _)| e.clone()).collect(),
                top_emojis.iter().map(|(_, count)| *count).collect(),
            ),
            media: project_onto(&media_counts, &top_authors),
            laughter: project_onto(&laughter_counts, &top_authors),
            starters: project_onto(&starter_counts, &top_authors),
            avg_length: Series::new(
                top_authors.iter().map(|(a, _)| a.clone()).collect(),
                avg_length_values,
            ),
            weekend: Series::new(
                WEEKEND_LABELS.iter().map(|&label| label.to_string()).collect(),
                weekend_counts.to_vec(),
            ),
            links: project_onto(&link_counts, &top_authors),
            questions: project_onto(&question_counts, &top_authors),
            words: project_onto(&word_counts, &top_authors),
            seasonality: Series::new(
                MONTH_LABELS.iter().map(|&label| label.to_string()).collect(),
                month_counts.to_vec(),
            ),
        })
    }
}

/// Computes aggregate statistics with a throwaway engine.
///
/// Equivalent to `StatsEngine::new().calculate(messages)`.
///
/// # Example
///
/// ```
/// use chatlens::stats::calculate_stats;
///
/// assert!(calculate_stats(&[]).is_none());
/// ```
pub fn calculate_stats(messages: &[Message]) -> Option<StatsResult> {
    StatsEngine::new().calculate(messages)
}

/// Top `limit` entries by descending value; ties break on key so the
/// ordering is deterministic.
fn top_entries(counts: &HashMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(key, &value)| (key.clone(), value))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

/// Projects a per-author counter onto the shared top-author label ordering,
/// filling absent authors with 0.
fn project_onto(counts: &HashMap<String, u64>, order: &[(String, u64)]) -> Series {
    Series::new(
        order.iter().map(|(author, _)| author.clone()).collect(),
        order
            .iter()
            .map(|(author, _)| counts.get(author).copied().unwrap_or(0))
            .collect(),
    )
}

/// Formats a sortable "YYYY-Qn" key as the chart label "Qn YYYY".
fn quarter_label(key: &str) -> String {
    match key.split_once('-') {
        Some((year, quarter)) => format!("{quarter} {year}"),
        None => key.to_string(),
    }
}
