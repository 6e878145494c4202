//! Edge cases: noisy input, locale quirks, and skip-rule interactions.

use chatlens::prelude::*;
use chrono::Datelike;

#[test]
fn parse_rejects_nothing_but_yields_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n\n").is_empty());
    assert!(parse("totally unrelated text\nstill unrelated").is_empty());
    assert!(parse("12/31/x not a date - Alice: nope").is_empty());
}

#[test]
fn preamble_before_first_header_is_discarded() {
    let text = "\
Chat export
Some banner line
Another one
14/12/20, 15:30 - Alice: actual start";
    let messages = parse(text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content(), "actual start");
}

#[test]
fn direction_marks_inside_and_before_headers() {
    let text = "\u{200e}[14/12/20, 15:30:00] Alice: hi\n\u{200f}14/12/20, 15:31 - Bob: yo";
    let messages = parse(text);
    assert_eq!(messages.len(), 2);
}

#[test]
fn colon_in_message_body_does_not_split_author() {
    let messages = parse("14/12/20, 15:30 - Alice: remember: buy milk");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author(), "Alice");
    assert_eq!(messages[0].content(), "remember: buy milk");
}

#[test]
fn mixed_format_export_parses_both_layouts() {
    // Exports merged from different phones can mix layouts.
    let text = "[14/12/20, 15:30:00] Alice: from ios\n15/12/20, 09:00 - Bob: from android";
    let messages = parse(text);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].timestamp().unwrap().day(), 14);
    assert_eq!(messages[1].timestamp().unwrap().day(), 15);
}

#[test]
fn years_resolve_to_2000s() {
    let m99 = parse("14/12/99, 15:30 - A: x");
    assert_eq!(m99[0].timestamp().unwrap().year(), 2099);
    let m1999 = parse("14/12/1999, 15:30 - A: x");
    assert_eq!(m1999[0].timestamp().unwrap().year(), 1999);
}

#[test]
fn rollover_dates_are_accepted_without_timestamp() {
    // Month 13 parses as a message; only the timestamp is absent.
    let messages = parse("14/13/20, 15:30 - Alice: weird clock");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].timestamp().is_none());
    assert_eq!(messages[0].content(), "weird clock");
}

#[test]
fn multiline_message_swallows_header_lookalikes() {
    // A continuation that merely resembles prose stays glued on.
    let text = "14/12/20, 15:30 - Alice: shopping list\n- milk\n- bread\n14/12/20, 15:31 - Bob: ok";
    let messages = parse(text);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content(), "shopping list\n- milk\n- bread");
}

#[test]
fn localized_multimedia_placeholders_flag() {
    for placeholder in [
        "<Media omitted>",
        "<Multimedia omitido>",
        "audio omitido",
        "imagen omitida",
        "documento omitido",
    ] {
        let text = format!("14/12/20, 15:30 - Alice: {placeholder}");
        let messages = parse(&text);
        assert!(messages[0].is_multimedia(), "not flagged: {placeholder}");
    }
}

#[test]
fn multimedia_and_deleted_do_not_break_streaks() {
    let text = "\
14/12/20, 15:30 - Alice: one
14/12/20, 15:31 - Alice: <Media omitted>
14/12/20, 15:32 - Alice: two
14/12/20, 15:33 - Bob: You deleted this message
14/12/20, 15:34 - Alice: three
14/12/20, 15:35 - Bob: break
14/12/20, 15:36 - Alice: solo";
    let messages = parse(text);
    let stats = calculate_stats(&messages).unwrap();
    let streak = stats.historic_streak.unwrap();

    // Alice's run spans the media and the deleted tombstone: one, two, three.
    assert_eq!(streak.author, "Alice");
    assert_eq!(streak.count, 3);
    assert_eq!(streak.start_message, "one");
    assert_eq!(streak.end_message, "three");
}

#[test]
fn deleted_day_does_not_count_as_active() {
    let text = "\
14/12/20, 15:30 - Alice: hello
15/12/20, 15:30 - Alice: This message was deleted";
    let messages = parse(text);
    let stats = calculate_stats(&messages).unwrap();
    assert_eq!(stats.days_active, 1);
}

#[test]
fn multimedia_only_day_counts_as_active() {
    let text = "\
14/12/20, 15:30 - Alice: hello
15/12/20, 15:30 - Alice: <Media omitted>";
    let messages = parse(text);
    let stats = calculate_stats(&messages).unwrap();
    assert_eq!(stats.days_active, 2);
    assert_eq!(stats.total_messages, 1);
}

#[test]
fn stats_on_unparsed_garbage_is_none() {
    let messages = parse("not an export");
    assert!(calculate_stats(&messages).is_none());
}

#[test]
fn author_with_colon_free_phone_number() {
    let messages = parse("14/12/20, 15:30 - +49 170 1234567: hallo");
    assert_eq!(messages[0].author(), "+49 170 1234567");
}

#[test]
fn question_mark_in_multimedia_does_not_count() {
    // The media short-circuit runs before content heuristics.
    let text = "\
14/12/20, 15:30 - Alice: <Media omitted>
14/12/20, 15:31 - Alice: plain";
    let mut messages = parse(text);
    messages[0].content.push('?');

    let stats = calculate_stats(&messages).unwrap();
    assert!(stats.questions.values.iter().all(|&v| v == 0));
}

#[test]
fn filter_day_boundaries_are_inclusive() {
    let text = "\
14/12/20, 00:00 - Alice: midnight start
14/12/20, 23:59 - Alice: just before midnight
15/12/20, 00:00 - Alice: next day";
    let messages = parse(text);

    let config = FilterConfig::new()
        .with_date_from("2020-12-14")
        .unwrap()
        .with_date_to("2020-12-14")
        .unwrap();
    let filtered = apply_filters(messages, &config);
    assert_eq!(filtered.len(), 2);
}

#[test]
fn windows_line_endings_leave_no_residue() {
    // \r survives the \n split but trimming strips it from content.
    let text = "14/12/20, 15:30 - Alice: hi\r\ncontinued";
    let messages = parse(text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content(), "hi\ncontinued");
}
