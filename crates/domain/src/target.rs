use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

/// Where a single query is sent.
///
/// Every query carries its own target, so concurrent lookups against
/// different name servers never observe each other's server choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetServers {
    /// The configured recursive resolvers.
    Default,
    /// Specific servers, tried in order.
    Explicit(Arc<[SocketAddr]>),
}

impl TargetServers {
    pub fn explicit(servers: impl Into<Arc<[SocketAddr]>>) -> Self {
        TargetServers::Explicit(servers.into())
    }
}

impl fmt::Display for TargetServers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetServers::Default => f.write_str("default"),
            TargetServers::Explicit(servers) => {
                let joined: Vec<String> = servers.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", joined.join(", "))
            }
        }
    }
}
