//! iCalendar property values (RFC 5545 §3.3).

/// Value of a property.
///
/// Only TEXT values are interpreted; every other value type is kept as the
/// raw string it was parsed from. The raw string is also kept on the owning
/// property for round-trip fidelity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// TEXT value (RFC 5545 §3.3.11), unescaped.
    Text(String),
    /// Any other value type, verbatim.
    Raw(String),
}

impl Value {
    /// Returns the unescaped text if this is a TEXT value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Raw(_) => None,
        }
    }

    /// Returns the value as a string regardless of type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Raw(s) => s,
        }
    }
}
