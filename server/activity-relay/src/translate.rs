//! Turn upstream events into activities: type filter plus per-type message.

use crate::error::FetchError;
use crate::types::{Activity, UpstreamEvent};

/// Keep events matching `event_type` (all of them when empty), in upstream order.
pub fn translate(events: &[UpstreamEvent], event_type: &str) -> Result<Vec<Activity>, FetchError> {
  events
    .iter()
    .filter(|e| matches_filter(e, event_type))
    .map(to_activity)
    .collect()
}

fn matches_filter(event: &UpstreamEvent, event_type: &str) -> bool {
  event_type.is_empty() || event.event_type == event_type
}

pub fn to_activity(event: &UpstreamEvent) -> Result<Activity, FetchError> {
  Ok(Activity {
    event_type: event.event_type.clone(),
    message: describe(event)?,
    repo_name: event.repo.name.clone(),
  })
}

/// Human-readable message for one event.
///
/// The two payload fields are treated differently on purpose:
/// - `IssuesEvent` needs `payload.action`; without it the event is rejected
///   instead of producing a half-filled message (" an issue").
/// - `PushEvent` with no `payload.commits` reports `Pushed 0 commits`. The
///   events API drops the list on some push events, so absence is a real,
///   well-defined count rather than missing data.
pub fn describe(event: &UpstreamEvent) -> Result<String, FetchError> {
  let message = match event.event_type.as_str() {
    "PushEvent" => format!("Pushed {} commits", event.payload.commit_count()),
    "IssuesEvent" => {
      let action = event
        .payload
        .action
        .as_deref()
        .ok_or_else(|| FetchError::missing_field(&event.event_type, "action"))?;
      format!("{} an issue", action)
    }
    "WatchEvent" => "Starred repository".to_string(),
    other => other.to_string(),
  };
  Ok(message)
}
