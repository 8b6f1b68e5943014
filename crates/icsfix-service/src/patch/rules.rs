use std::sync::LazyLock;

use icsfix_rfc::rfc::ical::{Component, core::names};
use regex::Regex;

use super::{PatchRule, clean_description};

/// Optional course number prefix followed by the rest of the line. A single
/// trailing newline is allowed after the captured title.
#[expect(clippy::expect_used, reason = "Pattern is a valid literal")]
static COURSE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ETI\.\d+\.\d+\.\d+\.V\.\d+\s+)?(.+)\n?$")
        .expect("course prefix pattern compiles")
});

const INFORMATIK_COURSE: &str = "Einführung in die Informatik";
const FREE_TUTORIAL: &str = "Freies Tutorium";
const TUTORIAL_SUFFIX: &str = " Tutorium";

/// Strips the `ETI.<n>.<n>.<n>.V.<n>` course number prefix from `SUMMARY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanSummary;

impl CleanSummary {
    /// Returns the summary without its course prefix, or `None` when the
    /// summary does not match at all (empty, or a line break in the middle).
    #[must_use]
    pub fn clean(summary: &str) -> Option<&str> {
        COURSE_PREFIX
            .captures(summary)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl PatchRule for CleanSummary {
    fn name(&self) -> &'static str {
        "clean_summary"
    }

    fn apply(&self, event: &mut Component) -> bool {
        let summary = event.get_text(names::SUMMARY).unwrap_or_default();
        let Some(cleaned) = Self::clean(summary) else {
            return false;
        };
        if cleaned == summary {
            return false;
        }

        let cleaned = cleaned.to_owned();
        event.set_text(names::SUMMARY, cleaned);
        true
    }
}

/// Marks the free tutorial of "Einführung in die Informatik" as such and
/// cleans up its description.
#[derive(Debug, Clone, Copy, Default)]
pub struct InformatikTutorium;

impl PatchRule for InformatikTutorium {
    fn name(&self) -> &'static str {
        "informatik_tutorium"
    }

    fn apply(&self, event: &mut Component) -> bool {
        let summary = event.get_text(names::SUMMARY).unwrap_or_default();
        let description = event.get_text(names::DESCRIPTION).unwrap_or_default();

        if !(summary.contains(INFORMATIK_COURSE) && description.contains(FREE_TUTORIAL)) {
            return false;
        }

        let new_summary = format!("{summary}{TUTORIAL_SUFFIX}");
        let cleaned = clean_description(description);
        if cleaned != description {
            event.set_text(names::DESCRIPTION, cleaned);
        }
        event.set_text(names::SUMMARY, new_summary);
        true
    }
}
