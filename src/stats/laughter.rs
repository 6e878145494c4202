//! Laughter detection heuristic.
//!
//! A message laughs when any of its words does. A word laughs when it is
//! one of a small acronym set, or when collapsing repeated characters
//! leaves only `j`/`h`/vowels with at least two `j` or `h` occurrences.
//! That shape covers "jaja", "jejeje", "haha", "JAJAJA" and their
//! elongations while rejecting ordinary words and near-misses like
//! "jsjsjs" (the `s` survives collapsing and is not in the alphabet).

/// Laughter acronyms accepted verbatim (after lowercasing).
const LAUGH_ACRONYMS: [&str; 3] = ["lol", "lmao", "xd"];

/// Returns `true` if any word in the content signals laughter.
pub(crate) fn is_laughter_message(content: &str) -> bool {
    content
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';' | '!' | '?'))
        .filter(|word| !word.is_empty())
        .any(is_laughter_word)
}

fn is_laughter_word(word: &str) -> bool {
    let word = word.to_lowercase();
    if LAUGH_ACRONYMS.contains(&word.as_str()) {
        return true;
    }

    let collapsed = collapse_repeats(&word);
    if collapsed.is_empty() {
        return false;
    }
    if !collapsed
        .chars()
        .all(|c| matches!(c, 'j' | 'h' | 'a' | 'e' | 'i' | 'o' | 'u'))
    {
        return false;
    }

    collapsed.chars().filter(|c| matches!(c, 'j' | 'h')).count() >= 2
}

/// Collapses consecutive duplicate characters: "jjjaaa" becomes "ja".
fn collapse_repeats(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev = None;
    for c in word.chars() {
        if Some(c) != prev {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
