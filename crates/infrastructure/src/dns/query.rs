use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::Transport;
use ferrous_dig_domain::{DomainError, DomainName, RecordKind};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// Options for a single-server exchange.
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub timeout: Duration,
    pub tcp_fallback: bool,
}

/// Execute one query against a single server.
///
/// Builds the message, sends it over UDP and parses the answer. A truncated
/// UDP answer is retried once over TCP within what is left of the timeout.
pub async fn query_server(
    server: SocketAddr,
    domain: &DomainName,
    kind: RecordKind,
    options: QueryOptions,
) -> Result<DnsResponse, DomainError> {
    let start = Instant::now();
    let (id, query_bytes) = MessageBuilder::build_query(domain, kind)?;

    let udp = Transport::udp(server);
    let transport_response = udp.send(&query_bytes, options.timeout).await?;
    let response = ResponseParser::parse_for_query(&transport_response.bytes, id, kind)?;

    if !response.truncated || !options.tcp_fallback {
        debug!(
            server = %server,
            protocol = transport_response.protocol_used,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query complete"
        );
        return Ok(response);
    }

    let remaining = options
        .timeout
        .checked_sub(start.elapsed())
        .filter(|d| !d.is_zero())
        .ok_or_else(|| DomainError::TransportTimeout {
            server: server.to_string(),
        })?;

    debug!(server = %server, "Response truncated (TC bit), retrying via TCP");

    let tcp = Transport::tcp(server);
    let tcp_response = tcp.send(&query_bytes, remaining).await?;
    let response = ResponseParser::parse_for_query(&tcp_response.bytes, id, kind)?;

    debug!(
        server = %server,
        protocol = tcp_response.protocol_used,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Query complete"
    );
    Ok(response)
}
