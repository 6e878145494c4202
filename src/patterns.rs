//! Compiled pattern table shared by the parser and the stats engine.
//!
//! All text heuristics live here as data rather than control flow, so each
//! pattern can be unit-tested independently of the loops that consume it.
//! Patterns are compiled once per [`Patterns`] value; the parser and the
//! engine each hold their own table.

use regex::Regex;

/// Header format variants found in the wild.
///
/// Both variants accept `/`, `.`, or `-` as the date separator and 2- or
/// 4-digit years. The date is always read day-month-year; locale detection
/// is deliberately out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// iOS format: bracketed date and a seconds-bearing time.
    /// Example: `[14/12/20, 15:30:12] Alice: Hello`
    Ios,
    /// Android format: bare date, minute-resolution time, ` - ` separator.
    /// Example: `14/12/20, 15:30 - Alice: Hello`
    Android,
}

impl HeaderFormat {
    /// Returns the regex pattern for this header format.
    ///
    /// Capture groups: 1 = date, 2 = time, 3 = author, 4 = content tail.
    pub fn pattern(self) -> &'static str {
        match self {
            // [14/12/20, 15:30:12] Alice: Hello
            HeaderFormat::Ios => {
                r"^\[(\d{1,2}[./-]\d{1,2}[./-]\d{2,4}),\s(\d{1,2}:\d{2}:\d{2})\]\s(.*?):\s(.*)"
            }
            // 14/12/20, 15:30 - Alice: Hello
            HeaderFormat::Android => {
                r"^(\d{1,2}[./-]\d{1,2}[./-]\d{2,4}),?\s(\d{1,2}:\d{2})\s-\s(.*?):\s(.*)"
            }
        }
    }
}

/// Multimedia placeholders emitted by the "export without media" option,
/// English and Spanish variants.
const MULTIMEDIA_PATTERN: &str = "(?i)<Multimedia omitido>|<Media omitted>|<image omitted>\
|<audio omitido>|<sticker omitido>|<video omitted>|<GIF omitted>\
|sticker omitido|audio omitido|imagen omitida|video omitido|GIF omitido\
|documento omitido|document omitted";

/// Tombstones left behind by message deletion, English and Spanish variants.
const DELETED_PATTERN: &str = "(?i)Eliminaste este mensaje|Este mensaje fue eliminado\
|This message was deleted|You deleted this message";

/// Code points with default emoji presentation. Matches one code point at a
/// time, so frequency keys are typically a single grapheme.
const EMOJI_PATTERN: &str = r"\p{Emoji_Presentation}";

/// The compiled pattern table.
///
/// # Example
///
/// ```
/// use chatlens::patterns::Patterns;
///
/// let patterns = Patterns::new();
/// assert!(patterns.multimedia.is_match("<Media omitted>"));
/// assert!(patterns.deleted.is_match("This message was deleted"));
/// ```
#[derive(Debug)]
pub struct Patterns {
    /// iOS header line matcher.
    pub ios_header: Regex,
    /// Android header line matcher.
    pub android_header: Regex,
    /// Multimedia placeholder matcher.
    pub multimedia: Regex,
    /// Deleted-message tombstone matcher.
    pub deleted: Regex,
    /// Single emoji code point matcher.
    pub emoji: Regex,
}

impl Patterns {
    /// Compiles the pattern table. The patterns are static and known-valid.
    pub fn new() -> Self {
        Self {
            ios_header: Regex::new(HeaderFormat::Ios.pattern()).unwrap(),
            android_header: Regex::new(HeaderFormat::Android.pattern()).unwrap(),
            multimedia: Regex::new(MULTIMEDIA_PATTERN).unwrap(),
            deleted: Regex::new(DELETED_PATTERN).unwrap(),
            emoji: Regex::new(EMOJI_PATTERN).unwrap(),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ios_header_matches() {
        let p = Patterns::new();
        let caps = p
            .ios_header
            .captures("[14/12/20, 15:30:12] Alice: Hello there")
            .unwrap();
        assert_eq!(&caps[1], "14/12/20");
        assert_eq!(&caps[2], "15:30:12");
        assert_eq!(&caps[3], "Alice");
        assert_eq!(&caps[4], "Hello there");
    }

    #[test]
    fn test_android_header_matches() {
        let p = Patterns::new();
        let caps = p
            .android_header
            .captures("14/12/20, 15:30 - Alice: Hello there")
            .unwrap();
        assert_eq!(&caps[1], "14/12/20");
        assert_eq!(&caps[2], "15:30");
        assert_eq!(&caps[3], "Alice");
        assert_eq!(&caps[4], "Hello there");
    }

    #[test]
    fn test_android_header_without_comma() {
        let p = Patterns::new();
        assert!(p.android_header.is_match("14/12/20 15:30 - Alice: Hi"));
    }

    #[test]
    fn test_header_separator_variants() {
        let p = Patterns::new();
        assert!(p.android_header.is_match("14.12.20, 15:30 - Alice: Hi"));
        assert!(p.android_header.is_match("14-12-2020, 15:30 - Alice: Hi"));
        assert!(p.ios_header.is_match("[14.12.2020, 15:30:00] Alice: Hi"));
    }

    #[test]
    fn test_ios_requires_seconds() {
        let p = Patterns::new();
        assert!(!p.ios_header.is_match("[14/12/20, 15:30] Alice: Hi"));
    }

    #[test]
    fn test_author_with_spaces_and_phone_number() {
        let p = Patterns::new();
        let caps = p
            .android_header
            .captures("14/12/20, 15:30 - +34 600 123 456: Hola")
            .unwrap();
        assert_eq!(&caps[3], "+34 600 123 456");
    }

    #[test]
    fn test_multimedia_variants() {
        let p = Patterns::new();
        for content in [
            "<Media omitted>",
            "<Multimedia omitido>",
            "<image omitted>",
            "audio omitido",
            "sticker omitido",
            "documento omitido",
            "document omitted",
        ] {
            assert!(p.multimedia.is_match(content), "should match: {content}");
        }
        assert!(!p.multimedia.is_match("just a normal message"));
    }

    #[test]
    fn test_multimedia_case_insensitive() {
        let p = Patterns::new();
        assert!(p.multimedia.is_match("<media OMITTED>"));
    }

    #[test]
    fn test_deleted_variants() {
        let p = Patterns::new();
        for content in [
            "Eliminaste este mensaje",
            "Este mensaje fue eliminado",
            "This message was deleted",
            "You deleted this message",
        ] {
            assert!(p.deleted.is_match(content), "should match: {content}");
        }
        assert!(!p.deleted.is_match("I deleted my account"));
    }

    #[test]
    fn test_emoji_matches_presentation_codepoints() {
        let p = Patterns::new();
        let found: Vec<&str> = p
            .emoji
            .find_iter("great 😂 job 🔥🔥")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["😂", "🔥", "🔥"]);
    }

    #[test]
    fn test_emoji_ignores_plain_text() {
        let p = Patterns::new();
        assert!(p.emoji.find_iter("no emoji here :) #1").next().is_none());
    }
}
