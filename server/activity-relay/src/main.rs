//! Binary entrypoint for the activity relay.

use activity_relay::{logging, Config};
use std::process;

#[tokio::main]
async fn main() {
  logging::init();

  let config = match Config::from_env() {
    Ok(c) => c,
    Err(e) => {
      tracing::error!(error = %e, "invalid configuration");
      process::exit(1);
    }
  };

  let app = match activity_relay::app(&config) {
    Ok(a) => a,
    Err(e) => {
      tracing::error!(error = %e, "cannot start upstream client");
      process::exit(1);
    }
  };

  let addr = config.server.addr();
  let listener = match activity_relay::bind(addr).await {
    Ok(l) => l,
    Err(e) => {
      tracing::error!(%addr, error = %e, "failed to bind listener");
      process::exit(1);
    }
  };

  tracing::info!(
    %addr,
    upstream = %config.upstream.base_url,
    authenticated = config.upstream.token.is_some(),
    "activity-relay listening"
  );

  if let Err(e) = activity_relay::serve(listener, app).await {
    tracing::error!(error = %e, "server error");
    process::exit(1);
  }
}
