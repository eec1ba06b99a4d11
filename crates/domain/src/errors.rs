use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Malformed {kind} record: {reason}")]
    MalformedRecord { kind: &'static str, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Server {server} answered {rcode}")]
    ServerFailure { server: String, rcode: &'static str },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("No target servers available")]
    NoTargetServers,

    #[error("All target servers are unreachable")]
    TransportAllServersUnreachable,
}

impl DomainError {
    /// Errors after which the next server in the target list is worth trying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::ServerFailure { .. }
                | DomainError::InvalidDnsResponse(_)
                | DomainError::IoError(_)
        )
    }
}
