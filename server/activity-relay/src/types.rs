//! Request/response types for the relay (inbound query, upstream feed, output).

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Inbound query (what the caller sends)
// ---------------------------------------------------------------------------

/// Query string of `GET /api/activity`. Unknown parameters are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ActivityQuery {
  pub username: Option<String>,
  /// Exact event type to keep, e.g. `PushEvent`. Empty means no filter.
  pub event_type: Option<String>,
}

impl ActivityQuery {
  /// Build from decoded `key=value` pairs. A repeated key keeps its first value.
  pub fn from_pairs<I>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (String, String)>,
  {
    let mut query = Self::default();
    for (key, value) in pairs {
      let slot = match key.as_str() {
        "username" => &mut query.username,
        "type" => &mut query.event_type,
        _ => continue,
      };
      if slot.is_none() {
        *slot = Some(value);
      }
    }
    query
  }
}

// ---------------------------------------------------------------------------
// Upstream types (GitHub events API, only the fields we read)
// ---------------------------------------------------------------------------

/// One event from `GET /users/{username}/events`. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamEvent {
  #[serde(rename = "type")]
  pub event_type: String,
  pub repo: UpstreamRepo,
  #[serde(default, deserialize_with = "null_as_default")]
  pub payload: UpstreamPayload,
}

/// `null` decodes the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamRepo {
  pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamPayload {
  #[serde(default)]
  pub action: Option<String>,
  /// Only the length matters; commit bodies are skipped.
  #[serde(default)]
  pub commits: Option<Vec<IgnoredAny>>,
}

impl UpstreamPayload {
  pub fn commit_count(&self) -> usize {
    self.commits.as_ref().map_or(0, Vec::len)
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we return)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
  #[serde(rename = "type")]
  pub event_type: String,
  pub message: String,
  pub repo_name: String,
}

/// Success body: `{"activities":[...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct ActivitiesResponse {
  pub activities: Vec<Activity>,
}
