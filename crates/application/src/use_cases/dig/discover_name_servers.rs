use crate::services::TypeResolver;
use ferrous_dig_domain::{DomainName, TargetServers};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Finds the closest enclosing zone that publishes NS records.
///
/// Walks from the full name towards the root, one label at a time, and stops
/// before the bare top-level label.
pub struct DiscoverNameServersUseCase {
    type_resolver: Arc<TypeResolver>,
}

impl DiscoverNameServersUseCase {
    pub fn new(type_resolver: Arc<TypeResolver>) -> Self {
        Self { type_resolver }
    }

    #[instrument(skip(self, name), fields(domain = %name))]
    pub async fn execute(&self, name: &DomainName) -> Option<Vec<String>> {
        let mut current = Some(name.clone());

        while let Some(candidate) = current.take().filter(DomainName::has_parent) {
            let found = self
                .type_resolver
                .name_servers(&candidate, &TargetServers::Default)
                .await;

            if let Some(name_servers) = found.filter(|ns| !ns.is_empty()) {
                debug!(zone = %candidate, count = name_servers.len(), "Name servers found");
                return Some(name_servers);
            }

            current = candidate.parent();
        }

        debug!("No name servers found");
        None
    }
}
