//! End-to-end tests of `modify_ics` on realistic feeds.

use icsfix_test::rfc::rfc::ical::{Component, ICalendar, parse, parse_bytes};
use icsfix_test::service::modify_ics;

use super::helpers::TIMETABLE;

fn component<'a>(ical: &'a ICalendar, uid: &str) -> &'a Component {
    let mut found = None;
    ical.walk(&mut |c| {
        if c.uid() == Some(uid) {
            found = Some(c);
        }
    });
    found.unwrap_or_else(|| panic!("no component with UID {uid}"))
}

fn modify(input: &str) -> String {
    let output = modify_ics(input.as_bytes()).expect("feed should be modified");
    String::from_utf8(output).expect("output is UTF-8")
}

/// ## Summary
/// The course prefix is removed from lecture summaries.
#[test_log::test]
fn lecture_prefix_is_removed() {
    let output = modify(TIMETABLE);
    let ical = parse(&output).unwrap();

    assert_eq!(
        component(&ical, "lecture@campus.example").summary(),
        Some("Algorithmen und Datenstrukturen")
    );
}

/// ## Summary
/// The free tutorial gets its suffix after the prefix is gone, and its
/// description is cleaned.
#[test_log::test]
fn tutorium_is_marked_and_cleaned() {
    let output = modify(TIMETABLE);
    let ical = parse(&output).unwrap();
    let tutorium = component(&ical, "tutorium@campus.example");

    assert_eq!(
        tutorium.summary(),
        Some("Einführung in die Informatik Tutorium")
    );
    assert_eq!(
        tutorium.get_property("SUMMARY").unwrap().get_param_value("LANGUAGE"),
        Some("de")
    );
    assert_eq!(
        tutorium.description(),
        Some("Freies Tutorium Fragen zur VorIesung, aIIe wiIIkommen")
    );
    assert!(output.contains(
        "DESCRIPTION:Freies Tutorium Fragen zur VorIesung\\, aIIe wiIIkommen\r\n"
    ));
}

/// ## Summary
/// Components other than events keep every field, even when they match the
/// rule triggers.
#[test]
fn non_event_components_are_unchanged() {
    let original = parse(TIMETABLE).unwrap();
    let patched = parse(&modify(TIMETABLE)).unwrap();

    assert_eq!(
        component(&patched, "todo@campus.example"),
        component(&original, "todo@campus.example")
    );
    assert_eq!(patched.timezones(), original.timezones());
    assert_eq!(
        patched.root.get_text("X-WR-CALNAME"),
        Some("Stundenplan")
    );
}

/// ## Summary
/// Untouched content lines are written back byte for byte.
#[test]
fn untouched_lines_keep_their_bytes() {
    let output = modify(TIMETABLE);

    let timezone_start = TIMETABLE.find("BEGIN:VTIMEZONE").unwrap();
    let timezone_end = TIMETABLE.find("END:VTIMEZONE\r\n").unwrap() + "END:VTIMEZONE\r\n".len();
    assert!(output.contains(&TIMETABLE[timezone_start..timezone_end]));

    assert!(output.contains("LOCATION:Hörsaal 1\\, Gebäude 5602\r\n"));
    assert!(output.contains("DTSTART;TZID=Europe/Berlin:20261019T100000\r\n"));
    assert!(output.contains("SUMMARY:ETI.1.2.3.V.4 Einführung in die Informatik\r\n"));
}

/// ## Summary
/// A feed no rule applies to comes back unchanged.
#[test]
fn feed_without_matches_round_trips() {
    let input = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:plain@example.com\r\n\
SUMMARY:Algorithms I\r\n\
DESCRIPTION:Raum 101\\; bitte pünktlich\r\n\
GEO:48.262;11.668\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    assert_eq!(modify(input), input);
    assert_eq!(parse_bytes(&modify_ics(input.as_bytes()).unwrap()).unwrap(), parse(input).unwrap());
}

/// ## Summary
/// A calendar without any events is serialized successfully.
#[test]
fn calendar_without_events() {
    let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Test//Test//EN\r\nEND:VCALENDAR\r\n";
    assert_eq!(modify(input), input);
}

/// ## Summary
/// Long patched values are folded to 75 octets.
#[test]
fn patched_values_are_folded() {
    let long_title = "Sehr lange Veranstaltung ".repeat(6);
    let input = format!(
        "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nSUMMARY:ETI.1.2.3.V.4 {}\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
        long_title.trim_end()
    );

    let output = modify(&input);

    for line in output.split("\r\n") {
        assert!(line.len() <= 75, "line longer than 75 octets: {line:?}");
    }
    let ical = parse(&output).unwrap();
    assert_eq!(ical.events()[0].summary(), Some(long_title.trim_end()));
}

/// ## Summary
/// Truncated input is rejected as a parse error, with no output.
#[test]
fn truncated_feed_is_a_parse_error() {
    let truncated = TIMETABLE.trim_end_matches("END:VCALENDAR\r\n");

    let err = modify_ics(truncated.as_bytes()).unwrap_err();

    assert!(err.is_parse_error());
    assert!(!err.is_upstream_error());
}
