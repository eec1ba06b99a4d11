use ferrous_dig_api::AppState;
use ferrous_dig_application::services::TypeResolver;
use ferrous_dig_application::use_cases::QueryAuthoritativeUseCase;
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dns::WireRecordResolver;
use std::sync::Arc;
use tracing::info;

pub struct DigServices {
    pub query_authoritative: Arc<QueryAuthoritativeUseCase>,
}

impl DigServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = WireRecordResolver::from_config(&config.dns)?;

        info!(
            resolvers = resolver.default_servers().len(),
            timeout_ms = config.dns.query_timeout,
            "DNS resolver initialized"
        );

        let type_resolver = Arc::new(TypeResolver::new(Arc::new(resolver)));
        let query_authoritative = Arc::new(
            QueryAuthoritativeUseCase::new(type_resolver)
                .with_authoritative_port(config.dns.authoritative_port),
        );

        Ok(Self {
            query_authoritative,
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            query_authoritative: self.query_authoritative.clone(),
        }
    }
}
