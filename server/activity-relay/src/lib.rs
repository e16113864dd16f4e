//! Activity Relay
//!
//! HTTP service that fetches a GitHub user's public event feed and returns a
//! simplified activity list. Stateless; one upstream call per request.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;
pub mod translate;
pub mod types;

pub use config::Config;
pub use error::{ApiError, ConfigError, FetchError};
pub use fetcher::ActivityFetcher;
pub use server::{app, bind, build_router, serve};
pub use state::AppState;
pub use types::{ActivitiesResponse, Activity, UpstreamEvent};
