use crate::dns::query::{query_server, QueryOptions};
use async_trait::async_trait;
use ferrous_dig_application::ports::RecordResolver;
use ferrous_dig_domain::config::{ConfigError, DnsConfig};
use ferrous_dig_domain::{DomainError, DomainName, RawAnswer, RecordKind, TargetServers};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// `RecordResolver` speaking DNS on the wire.
///
/// Servers in a target are tried in order; a server that times out, refuses,
/// or answers with anything other than NOERROR/NXDOMAIN hands over to the
/// next one.
pub struct WireRecordResolver {
    default_servers: Arc<[SocketAddr]>,
    options: QueryOptions,
}

impl WireRecordResolver {
    pub fn new(default_servers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self {
            default_servers: default_servers.into(),
            options: QueryOptions {
                timeout,
                tcp_fallback: true,
            },
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, ConfigError> {
        let servers = config.resolver_addrs()?;
        Ok(Self::new(servers, config.timeout()).with_tcp_fallback(config.tcp_fallback))
    }

    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.options.tcp_fallback = enabled;
        self
    }

    pub fn default_servers(&self) -> &[SocketAddr] {
        &self.default_servers
    }

    fn servers_for<'a>(&'a self, target: &'a TargetServers) -> &'a [SocketAddr] {
        match target {
            TargetServers::Default => &self.default_servers[..],
            TargetServers::Explicit(servers) => &servers[..],
        }
    }
}

#[async_trait]
impl RecordResolver for WireRecordResolver {
    async fn resolve(
        &self,
        kind: RecordKind,
        name: &DomainName,
        target: &TargetServers,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        let servers = self.servers_for(target);
        if servers.is_empty() {
            return Err(DomainError::NoTargetServers);
        }

        let mut last_error = None;

        for (index, server) in servers.iter().enumerate() {
            let outcome = query_server(*server, name, kind, self.options)
                .await
                .and_then(|response| response.into_answers(*server));

            match outcome {
                Ok(answers) => {
                    debug!(
                        server = %server,
                        domain = %name,
                        record_type = %kind,
                        position = index,
                        "Server responded"
                    );
                    return Ok(answers);
                }
                Err(e) if e.is_retryable() => {
                    warn!(server = %server, error = %e, position = index, "Failing over");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(match last_error {
            Some(e) if servers.len() == 1 => e,
            _ => DomainError::TransportAllServersUnreachable,
        })
    }
}
