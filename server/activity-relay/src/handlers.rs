//! HTTP handlers for the relay.

use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{ActivitiesResponse, ActivityQuery};

pub async fn health() -> &'static str {
  "ok"
}

/// `GET /api/activity?username=<name>&type=<optional>`.
pub async fn activity(
  State(state): State<Arc<AppState>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ActivitiesResponse>, ApiError> {
  let query = ActivityQuery::from_pairs(pairs);
  let username = match query.username.as_deref() {
    Some(u) if !u.is_empty() => u,
    _ => return Err(ApiError::MissingParameter),
  };
  let event_type = query.event_type.as_deref().unwrap_or_default();

  match state.fetcher.fetch_activity(username, event_type).await {
    Ok(activities) => Ok(Json(ActivitiesResponse { activities })),
    Err(e) => {
      tracing::warn!(username, kind = e.kind(), error = %e, "activity fetch failed");
      Err(e.into())
    }
  }
}
