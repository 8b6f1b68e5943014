//! Value decoding for iCalendar (RFC 5545 §3.3).

/// Unescapes a TEXT value (RFC 5545 §3.3.11).
///
/// Handles `\\`, `\,`, `\;`, `\n` and `\N`. Any other escape is kept as-is.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(',') => result.push(','),
            Some(';') => result.push(';'),
            Some('\\') | None => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_text_basic() {
        assert_eq!(unescape_text("hello\\, world"), "hello, world");
        assert_eq!(unescape_text("line1\\nline2\\Nline3"), "line1\nline2\nline3");
        assert_eq!(unescape_text("back\\\\slash"), "back\\slash");
        assert_eq!(unescape_text("semi\\;colon"), "semi;colon");
    }

    #[test]
    fn unescape_text_keeps_unknown_escapes() {
        assert_eq!(unescape_text("C:\\temp"), "C:\\temp");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
    }

    #[test]
    fn unescape_text_leaves_plain_text() {
        assert_eq!(unescape_text("Freies Tutorium"), "Freies Tutorium");
        assert_eq!(unescape_text(""), "");
    }
}
