//! Shared handler state.

use crate::fetcher::ActivityFetcher;

/// Read-only across requests; nothing here is mutated after startup.
pub struct AppState {
  pub fetcher: ActivityFetcher,
}
