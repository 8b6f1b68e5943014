//! iCalendar serialization (RFC 5545).

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::{MAX_LINE_OCTETS, fold_line};
pub use serializer::{serialize, serialize_bytes, serialize_component, serialize_property};
