//! iCalendar property and content line types (RFC 5545 §3.1, §3.8).

use super::{Parameter, Value};
use crate::rfc::ical::build::escape_text;

/// A raw content line as parsed from iCalendar text.
///
/// This is the low-level representation before value type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
}

impl ContentLine {
    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the VALUE parameter if present.
    #[must_use]
    pub fn value_type(&self) -> Option<&str> {
        self.get_param(names::VALUE_PARAM)?.value()
    }
}

/// A parsed iCalendar property.
///
/// Holds the typed value along with the raw value text that is written back
/// on serialization. The two are kept in sync by [`Property::set_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Parsed value.
    pub value: Value,
    /// Raw value string, escaped as it appears on the content line.
    pub raw_value: String,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: escape_text(&value),
            value: Value::Text(value),
        }
    }

    /// Creates a property whose value is kept verbatim.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: value.clone(),
            value: Value::Raw(value),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Adds a parameter to this property.
    pub fn add_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the unescaped text of a text value, or the raw text otherwise.
    #[must_use]
    pub fn text_value(&self) -> &str {
        self.value.as_str()
    }

    /// Replaces the value with `text`, re-escaping the raw value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.raw_value = escape_text(&text);
        self.value = Value::Text(text);
    }
}

/// Property and parameter names used across the workspace.
pub mod names {
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";

    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const PRODID: &str = "PRODID";
    pub const SUMMARY: &str = "SUMMARY";
    pub const UID: &str = "UID";
    pub const VERSION: &str = "VERSION";

    pub const VALUE_PARAM: &str = "VALUE";
}
