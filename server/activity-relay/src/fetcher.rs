//! Upstream fetcher: one GET against the events API, decoded and translated.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};

use crate::config::UpstreamConfig;
use crate::error::FetchError;
use crate::translate;
use crate::types::{Activity, UpstreamEvent};

/// HTTP client wrapper for the activity-feed API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ActivityFetcher {
  client: Client,
  base_url: String,
  token: Option<String>,
}

impl ActivityFetcher {
  pub fn try_new(config: &UpstreamConfig) -> Result<Self, FetchError> {
    let client = Client::builder()
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(FetchError::Client)?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      token: config.token.clone(),
    })
  }

  pub fn events_url(&self, username: &str) -> String {
    format!("{}/users/{}/events", self.base_url, username)
  }

  /// Fetch `username`'s public events and translate them.
  ///
  /// `event_type` filters by exact type; empty keeps everything. No retry;
  /// the client's default timeout applies.
  pub async fn fetch_activity(
    &self,
    username: &str,
    event_type: &str,
  ) -> Result<Vec<Activity>, FetchError> {
    let url = self.events_url(username);
    tracing::debug!(username, event_type, "fetching upstream events");

    let mut request = self.client.get(&url);
    if let Some(token) = &self.token {
      request = request.header(AUTHORIZATION, format!("token {}", token));
    }

    let response = request.send().await.map_err(FetchError::Network)?;

    let status = response.status();
    if status != StatusCode::OK {
      return Err(FetchError::UpstreamStatus(status.as_u16()));
    }

    // Read the whole body first so transport and parse failures stay distinct.
    let body = response.bytes().await.map_err(FetchError::Network)?;
    let events: Vec<UpstreamEvent> = serde_json::from_slice(&body)?;

    translate::translate(&events, event_type)
  }
}
