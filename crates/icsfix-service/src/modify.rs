//! The feed rewrite pipeline: parse, patch, serialize.

use icsfix_rfc::rfc::ical::{build, parse};

use crate::error::ServiceResult;
use crate::patch::apply_patches;
use crate::upstream::UpstreamClient;

/// ## Summary
/// Parses an ICS feed, applies the event patches and serializes the result.
///
/// Components other than `VEVENT` are written back unchanged.
///
/// ## Errors
/// Returns a parse error if `input` is not a well-formed iCalendar document.
/// No partial output is produced.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn modify_ics(input: &[u8]) -> ServiceResult<Vec<u8>> {
    let mut ical = parse::parse_bytes(input)?;

    let report = apply_patches(&mut ical);
    let output = build::serialize_bytes(&ical);

    tracing::debug!(
        events = report.events,
        changes = report.changes,
        output_len = output.len(),
        "Feed modified"
    );

    Ok(output)
}

/// ## Summary
/// Fetches the feed at `url` and runs it through [`modify_ics`].
///
/// ## Errors
/// Returns an upstream error if the feed cannot be retrieved, or a parse
/// error if the retrieved body is not valid iCalendar.
#[tracing::instrument(skip(client, url))]
pub async fn fetch_and_modify(client: &UpstreamClient, url: &str) -> ServiceResult<Vec<u8>> {
    let body = client.fetch(url).await?;
    modify_ics(&body)
}
