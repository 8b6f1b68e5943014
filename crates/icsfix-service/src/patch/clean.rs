use std::sync::LazyLock;

use regex::Regex;

#[expect(clippy::expect_used, reason = "Pattern is a valid literal")]
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML tag pattern compiles"));

/// ## Summary
/// Strips HTML tags and `&nbsp;` entities from a description and replaces
/// every lowercase `l` with an uppercase `I`.
///
/// No other entities are decoded. The letter substitution applies to the
/// whole text, words unrelated to markup included.
#[must_use]
pub fn clean_description(description: &str) -> String {
    HTML_TAG
        .replace_all(description, "")
        .replace("&nbsp;", "")
        .replace('l', "I")
}
