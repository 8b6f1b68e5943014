//! iCalendar parsing primitives (RFC 5545).
//!
//! This module provides parsers for iCalendar content:
//! - Lexer: Decoding, unfolding and content line parsing
//! - Values: TEXT value unescaping
//! - Parser: Full document parsing into the component tree

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{decode, parse_content_line, split_lines};
pub use parser::{MAX_NESTING_DEPTH, parse, parse_bytes};
pub use values::unescape_text;
