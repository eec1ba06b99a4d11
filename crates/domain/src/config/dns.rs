use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Recursive resolvers used for NS discovery and name server address lookups.
    #[serde(default = "default_resolvers")]
    pub default_resolvers: Vec<String>,

    /// Per-query timeout in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Retry truncated UDP answers over TCP.
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,

    /// Port used when querying discovered name servers directly.
    #[serde(default = "default_dns_port")]
    pub authoritative_port: u16,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            default_resolvers: default_resolvers(),
            query_timeout: default_query_timeout(),
            tcp_fallback: true,
            authoritative_port: DEFAULT_DNS_PORT,
        }
    }
}

impl DnsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }

    /// Parses every entry of `default_resolvers`, failing on the first bad one.
    pub fn resolver_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.default_resolvers
            .iter()
            .map(|entry| parse_resolver_addr(entry))
            .collect()
    }
}

/// Accepts `ip:port`, `[v6]:port` or a bare IP (port 53).
pub fn parse_resolver_addr(entry: &str) -> Result<SocketAddr, ConfigError> {
    let entry = entry.trim();
    if let Ok(addr) = entry.parse::<SocketAddr>() {
        return Ok(addr);
    }
    entry
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::InvalidResolver(entry.to_string()))
}

fn default_resolvers() -> Vec<String> {
    vec!["1.1.1.1:53".to_string()]
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_dns_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_true() -> bool {
    true
}
