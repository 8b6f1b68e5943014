//! iCalendar RFC 5545 implementation.
//!
//! This module provides the iCalendar parsing and serialization used by the
//! feed patcher:
//!
//! - `core`: Type definitions for iCalendar structures
//! - `parse`: Parsers for iCalendar content
//! - `build`: Serializers for iCalendar content
//!
//! ## Example
//!
//! ```rust
//! use icsfix_rfc::rfc::ical::{build, core::*, parse};
//!
//! let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
//! let mut ical = parse::parse(input).unwrap();
//!
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Team Meeting"));
//! ical.add_event(event);
//!
//! let output = build::serialize(&ical);
//! assert!(output.contains("SUMMARY:Team Meeting\r\n"));
//! ```

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use build::serialize;
pub use core::{Component, ComponentKind, ICalendar, Parameter, Property, Value};
pub use parse::{ParseError, ParseResult, parse, parse_bytes};
