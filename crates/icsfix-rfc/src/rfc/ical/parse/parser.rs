//! iCalendar document parser (RFC 5545).
//!
//! Parses complete iCalendar documents into a component tree.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{decode, parse_content_line, split_lines};
use super::values::unescape_text;
use crate::rfc::ical::core::{Component, ComponentKind, ContentLine, ICalendar, Property, Value, names};

/// Deepest component nesting accepted by the parser. VCALENDAR is depth 1.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Properties whose default value type is TEXT (RFC 5545 §3.7, §3.8, RFC 7986).
const TEXT_PROPERTIES: &[&str] = &[
    "ACTION",
    "CALSCALE",
    "CATEGORIES",
    "CLASS",
    "COLOR",
    "COMMENT",
    "CONTACT",
    "DESCRIPTION",
    "LOCATION",
    "METHOD",
    "NAME",
    "PRODID",
    "RELATED-TO",
    "REQUEST-STATUS",
    "RESOURCES",
    "STATUS",
    "SUMMARY",
    "TRANSP",
    "TZID",
    "TZNAME",
    "UID",
    "VERSION",
];

/// Parses an iCalendar document from raw bytes.
///
/// ## Errors
///
/// Returns an error if the input is not UTF-8 or not valid iCalendar.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_bytes(input: &[u8]) -> ParseResult<ICalendar> {
    let text = decode(input).inspect_err(|e| {
        tracing::warn!(error = %e, "iCalendar input is not valid UTF-8");
    })?;
    parse(text)
}

/// Parses an iCalendar document from a string.
///
/// The document must consist of exactly one VCALENDAR component.
///
/// ## Errors
///
/// Returns an error if the input is not valid iCalendar.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let lines = split_lines(input);

    if lines.is_empty() {
        tracing::warn!("Empty iCalendar input");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1));
    }

    tracing::trace!(count = lines.len(), "Split lines");

    let content_lines: Vec<(usize, ContentLine)> = lines
        .into_iter()
        .map(|(line_num, line)| parse_content_line(&line, line_num).map(|cl| (line_num, cl)))
        .collect::<ParseResult<_>>()?;

    let eof_line_num = content_lines.last().map_or(1, |(line_num, _)| *line_num);
    let mut iter = content_lines.into_iter();

    let Some((line_num, begin)) = iter.next() else {
        return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1));
    };
    if begin.name != names::BEGIN
        || ComponentKind::parse(begin.raw_value.trim()) != ComponentKind::Calendar
    {
        tracing::warn!(first = %begin.name, "Document does not start with BEGIN:VCALENDAR");
        return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
            .with_context("expected BEGIN:VCALENDAR"));
    }

    let root = parse_component(&mut iter, line_num, eof_line_num, &begin.raw_value, 1)?;

    if let Some((line_num, extra)) = iter.next() {
        tracing::warn!(line = line_num, "Content after END:VCALENDAR");
        return Err(ParseError::new(ParseErrorKind::TrailingContent, line_num, 1)
            .with_context(format!("unexpected {} line", extra.name)));
    }

    tracing::debug!(
        properties = root.properties.len(),
        children = root.children.len(),
        "iCalendar document parsed successfully"
    );

    Ok(ICalendar { root })
}

/// Parses the body of a component whose BEGIN line has been consumed,
/// up to and including its matching END line.
///
/// `eof_line_num` is the last line of the input, reported when the END line
/// is missing.
fn parse_component<I>(
    iter: &mut I,
    begin_line_num: usize,
    eof_line_num: usize,
    raw_name: &str,
    depth: usize,
) -> ParseResult<Component>
where
    I: Iterator<Item = (usize, ContentLine)>,
{
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(
            ParseError::new(ParseErrorKind::InvalidContentLine, begin_line_num, 1)
                .with_context("BEGIN without component name"),
        );
    }
    if depth > MAX_NESTING_DEPTH {
        return Err(
            ParseError::new(ParseErrorKind::InvalidNesting, begin_line_num, 1).with_context(
                format!("components nested deeper than {MAX_NESTING_DEPTH} levels"),
            ),
        );
    }

    let mut component = Component::named(name);

    loop {
        let Some((line_num, content_line)) = iter.next() else {
            return Err(
                ParseError::new(ParseErrorKind::MissingEnd, eof_line_num, 1)
                    .with_context(format!("missing END:{}", component.name)),
            );
        };

        match content_line.name.as_str() {
            names::BEGIN => {
                let child = parse_component(
                    iter,
                    line_num,
                    eof_line_num,
                    &content_line.raw_value,
                    depth + 1,
                )?;
                component.children.push(child);
            }
            names::END => {
                let end_name = content_line.raw_value.trim();
                if !end_name.eq_ignore_ascii_case(&component.name) {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{}, got END:{end_name}",
                                component.name
                            )),
                    );
                }
                return Ok(component);
            }
            _ => component.properties.push(parse_property(content_line)),
        }
    }
}

/// Builds a property from a content line, unescaping TEXT values.
fn parse_property(cl: ContentLine) -> Property {
    let value = if is_text(&cl) {
        Value::Text(unescape_text(&cl.raw_value))
    } else {
        Value::Raw(cl.raw_value.clone())
    };

    Property {
        name: cl.name,
        params: cl.params,
        value,
        raw_value: cl.raw_value,
    }
}

/// Determines whether a property carries a TEXT value.
///
/// An explicit VALUE parameter wins; otherwise the property's default type
/// decides, with X- properties treated as text.
fn is_text(cl: &ContentLine) -> bool {
    if let Some(value_type) = cl.value_type() {
        return value_type.eq_ignore_ascii_case("TEXT");
    }
    cl.name.starts_with("X-") || TEXT_PROPERTIES.contains(&cl.name.as_str())
}
