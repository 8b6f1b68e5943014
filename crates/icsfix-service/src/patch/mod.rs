//! Event patch engine.
//!
//! Every `VEVENT` of a document, nested ones included, is run through
//! [`PATCHES`] in list order. Each rule sees the result of the rules before
//! it. Other component kinds are never handed to a rule.

mod clean;
mod rules;

use icsfix_rfc::rfc::ical::{Component, ICalendar};

pub use clean::clean_description;
pub use rules::{CleanSummary, InformatikTutorium};

/// A text transform applied to a single event.
pub trait PatchRule {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Applies the rule to `event` in place.
    ///
    /// Missing properties read as the empty string. Returns whether the event
    /// was changed.
    fn apply(&self, event: &mut Component) -> bool;
}

/// The rules applied to every event, in application order.
pub const PATCHES: &[&dyn PatchRule] = &[&CleanSummary, &InformatikTutorium];

/// Counts gathered while patching a document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchReport {
    /// Number of `VEVENT` components visited.
    pub events: usize,
    /// Number of rule applications that changed an event.
    pub changes: usize,
}

/// ## Summary
/// Applies [`PATCHES`] to every event of `ical`.
#[tracing::instrument(skip_all)]
pub fn apply_patches(ical: &mut ICalendar) -> PatchReport {
    apply_rules(ical, PATCHES)
}

/// ## Summary
/// Applies `rules` in order to every event of `ical`, walking the component
/// tree depth-first.
pub fn apply_rules(ical: &mut ICalendar, rules: &[&dyn PatchRule]) -> PatchReport {
    let mut report = PatchReport::default();

    ical.walk_mut(&mut |component| {
        if !component.is_event() {
            return;
        }
        report.events += 1;

        for rule in rules {
            if rule.apply(component) {
                report.changes += 1;
                tracing::trace!(
                    rule = rule.name(),
                    uid = component.uid().unwrap_or_default(),
                    "Patch applied"
                );
            }
        }
    });

    tracing::debug!(
        events = report.events,
        changes = report.changes,
        "Patched calendar events"
    );

    report
}
