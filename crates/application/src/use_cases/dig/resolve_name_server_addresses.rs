use crate::services::TypeResolver;
use ferrous_dig_domain::{DomainName, TargetServers};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::warn;

pub struct ResolveNameServerAddressesUseCase {
    type_resolver: Arc<TypeResolver>,
}

impl ResolveNameServerAddressesUseCase {
    pub fn new(type_resolver: Arc<TypeResolver>) -> Self {
        Self { type_resolver }
    }

    /// IPv4 addresses of `host` via the default resolvers; empty when the
    /// lookup fails or has no answers.
    pub async fn execute(&self, host: &str) -> Vec<IpAddr> {
        let name = match DomainName::parse(host) {
            Ok(name) => name,
            Err(e) => {
                warn!(name_server = %host, error = %e, "Unusable name server hostname");
                return Vec::new();
            }
        };

        let addresses = self
            .type_resolver
            .addresses(&name, &TargetServers::Default)
            .await
            .unwrap_or_default();

        if addresses.is_empty() {
            warn!(name_server = %host, "Name server has no IPv4 addresses");
        }

        addresses
    }
}
