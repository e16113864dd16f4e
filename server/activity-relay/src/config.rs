//! Relay configuration with sane defaults.
//!
//! Read once from the environment in `main`, then passed down explicitly.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_PORT: u16 = 8080;

/// Where and how to call the upstream events API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
  /// Base URL without trailing slash.
  pub base_url: String,
  /// Sent as `Authorization: token <value>` when set.
  pub token: Option<String>,
  pub user_agent: String,
}

impl Default for UpstreamConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_API_URL.to_string(),
      token: None,
      user_agent: concat!("activity-relay/", env!("CARGO_PKG_VERSION")).to_string(),
    }
  }
}

/// Inbound listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub host: IpAddr,
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
      port: DEFAULT_PORT,
    }
  }
}

impl ServerConfig {
  pub fn addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
  pub upstream: UpstreamConfig,
  pub server: ServerConfig,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup. Unset and empty values both mean "use the default".
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let mut config = Self::default();

    config.upstream.token = get("GITHUB_TOKEN");
    if let Some(url) = get("GITHUB_API_URL") {
      config.upstream.base_url = url.trim_end_matches('/').to_string();
    }

    if let Some(port) = get("PORT") {
      config.server.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
    }
    if let Some(host) = get("HOST") {
      config.server.host = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;
    }

    Ok(config)
  }
}
