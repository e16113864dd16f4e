//! Structured error types for the relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of one upstream fetch.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("failed to fetch data: {0}")]
  Network(#[source] reqwest::Error),

  #[error("API returned status code {0}")]
  UpstreamStatus(u16),

  #[error("failed to parse JSON: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("failed to parse JSON: {event_type} event missing payload.{field}")]
  MissingField {
    event_type: String,
    field: &'static str,
  },

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),
}

impl FetchError {
  pub fn missing_field(event_type: &str, field: &'static str) -> Self {
    Self::MissingField {
      event_type: event_type.to_string(),
      field,
    }
  }

  /// Stable tag for logs; callers of the HTTP API never see it.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Network(_) => "network",
      Self::UpstreamStatus(_) => "upstream_status",
      Self::Decode(_) | Self::MissingField { .. } => "decode",
      Self::Client(_) => "client",
    }
  }
}

/// Invalid process configuration; fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("PORT must be a valid u16, got {0:?}")]
  InvalidPort(String),

  #[error("HOST must be an IP address, got {0:?}")]
  InvalidHost(String),
}

/// Errors surfaced by `GET /api/activity`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("username parameter is required")]
  MissingParameter,

  #[error(transparent)]
  Fetch(#[from] FetchError),
}

impl ApiError {
  /// Every fetch failure maps to 500; the upstream status is not passed through.
  pub fn status(&self) -> StatusCode {
    match self {
      Self::MissingParameter => StatusCode::BAD_REQUEST,
      Self::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status(), self.to_string()).into_response()
  }
}
