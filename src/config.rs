//! Server configuration from environment variables
//!
//! | Variable            | Default   |
//! |---------------------|-----------|
//! | `HOST`              | `0.0.0.0` |
//! | `PORT`              | `3000`    |
//! | `ESTIMATE_DELAY_MS` | `0`       |
//!
//! Unparseable values fall back to the default with a warning.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Artificial latency before each estimate response (cosmetic only)
    pub estimate_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            estimate_delay: Duration::ZERO,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let delay_ms: u64 = parse_or("ESTIMATE_DELAY_MS", lookup("ESTIMATE_DELAY_MS"), 0);

        Self {
            host: parse_or("HOST", lookup("HOST"), defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            estimate_delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Debug>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
            default
        }),
    }
}
