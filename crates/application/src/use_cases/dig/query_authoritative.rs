use super::{DiscoverNameServersUseCase, ResolveNameServerAddressesUseCase};
use crate::services::TypeResolver;
use ferrous_dig_domain::{DomainName, RecordKind, ServerAnswerBundle, TargetServers};
use futures::future::join_all;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub const DEFAULT_AUTHORITATIVE_PORT: u16 = 53;

/// Asks every authoritative server of a name directly for its records.
///
/// Name servers are handled concurrently and each one gets its own explicit
/// target, so batches never share server state. Output follows discovery
/// order.
pub struct QueryAuthoritativeUseCase {
    discover: DiscoverNameServersUseCase,
    resolve_addresses: ResolveNameServerAddressesUseCase,
    type_resolver: Arc<TypeResolver>,
    authoritative_port: u16,
}

impl QueryAuthoritativeUseCase {
    pub fn new(type_resolver: Arc<TypeResolver>) -> Self {
        Self {
            discover: DiscoverNameServersUseCase::new(type_resolver.clone()),
            resolve_addresses: ResolveNameServerAddressesUseCase::new(type_resolver.clone()),
            type_resolver,
            authoritative_port: DEFAULT_AUTHORITATIVE_PORT,
        }
    }

    /// Port used when querying name servers directly.
    pub fn with_authoritative_port(mut self, port: u16) -> Self {
        self.authoritative_port = port;
        self
    }

    #[instrument(skip(self, name), fields(domain = %name))]
    pub async fn execute(&self, name: &DomainName) -> Vec<ServerAnswerBundle> {
        let Some(name_servers) = self.discover.execute(name).await else {
            info!("No authoritative servers discovered");
            return Vec::new();
        };

        let bundles = join_all(
            name_servers
                .into_iter()
                .map(|name_server| self.query_server(name, name_server)),
        )
        .await;

        info!(servers = bundles.len(), "Authoritative query complete");
        bundles
    }

    async fn query_server(&self, name: &DomainName, name_server: String) -> ServerAnswerBundle {
        let addresses = self.resolve_addresses.execute(&name_server).await;
        let mut bundle = ServerAnswerBundle::new(name_server, addresses);
        if !bundle.is_resolved() {
            return bundle;
        }

        let target = self.target_for(&bundle.name_server_addresses);
        let target = &target;

        let results = join_all(RecordKind::AUTHORITATIVE.into_iter().map(|kind| async move {
            let records = self.type_resolver.resolve(kind, name, target).await;
            (kind, records)
        }))
        .await;

        for (kind, records) in results {
            if let Some(records) = records {
                bundle.insert_records(kind, records);
            }
        }

        debug!(
            name_server = %bundle.name_server,
            kinds = bundle.records.len(),
            "Server answered"
        );
        bundle
    }

    fn target_for(&self, addresses: &[IpAddr]) -> TargetServers {
        TargetServers::explicit(
            addresses
                .iter()
                .map(|ip| SocketAddr::new(*ip, self.authoritative_port))
                .collect::<Vec<_>>(),
        )
    }
}
