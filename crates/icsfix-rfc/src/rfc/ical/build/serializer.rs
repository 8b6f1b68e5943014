//! iCalendar serializer (RFC 5545).
//!
//! Components, properties and parameters are written in the order they are
//! stored. Property values come from `raw_value`, so untouched lines keep
//! their original escaping.

use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ICalendar, Property, names};

/// Serializes an iCalendar document to a string.
#[must_use]
#[tracing::instrument(skip(ical), fields(children = ical.root.children.len()))]
pub fn serialize(ical: &ICalendar) -> String {
    let output = serialize_component(&ical.root);
    tracing::debug!(output_len = output.len(), "iCalendar document serialized");
    output
}

/// Serializes an iCalendar document to UTF-8 bytes.
#[must_use]
pub fn serialize_bytes(ical: &ICalendar) -> Vec<u8> {
    serialize(ical).into_bytes()
}

/// Serializes a component and its children to a string.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut result = String::new();
    write_component(&mut result, component);
    result
}

/// Serializes a single property to a folded, CRLF-terminated content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();
    for param in &prop.params {
        line.push(';');
        line.push_str(&param.to_string());
    }
    line.push(':');
    line.push_str(&prop.raw_value);

    fold_line(&line)
}

fn write_component(out: &mut String, component: &Component) {
    out.push_str(&fold_line(&format!("{}:{}", names::BEGIN, component.name)));
    for prop in &component.properties {
        out.push_str(&serialize_property(prop));
    }
    for child in &component.children {
        write_component(out, child);
    }
    out.push_str(&fold_line(&format!("{}:{}", names::END, component.name)));
}
