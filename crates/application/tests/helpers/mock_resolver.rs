use async_trait::async_trait;
use ferrous_dig_application::ports::RecordResolver;
use ferrous_dig_application::services::TypeResolver;
use ferrous_dig_application::use_cases::QueryAuthoritativeUseCase;
use ferrous_dig_domain::{
    CaaRecord, DomainError, DomainName, RawAnswer, RecordKind, TargetServers,
};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded call to the mock resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub kind: RecordKind,
    pub name: String,
    pub target: TargetServers,
}

type ResponseKey = (RecordKind, String, TargetServers);

/// Scripted resolver. Unscripted queries answer NOERROR with no records.
#[derive(Clone, Default)]
pub struct MockRecordResolver {
    responses: Arc<Mutex<HashMap<ResponseKey, Result<Vec<RawAnswer>, DomainError>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(
        &self,
        kind: RecordKind,
        name: &str,
        target: TargetServers,
        answers: Vec<RawAnswer>,
    ) {
        self.responses
            .lock()
            .unwrap()
            .insert((kind, name.to_string(), target), Ok(answers));
    }

    pub fn set_response_error(
        &self,
        kind: RecordKind,
        name: &str,
        target: TargetServers,
        error: DomainError,
    ) {
        self.responses
            .lock()
            .unwrap()
            .insert((kind, name.to_string(), target), Err(error));
    }

    /// Name servers for `zone` via the default resolvers.
    pub fn set_name_servers(&self, zone: &str, hosts: &[&str]) {
        self.set_response(
            RecordKind::NS,
            zone,
            TargetServers::Default,
            hosts.iter().map(|h| RawAnswer::Name(Arc::from(*h))).collect(),
        );
    }

    /// A records for `host` via the default resolvers.
    pub fn set_host_addresses(&self, host: &str, addresses: &[&str]) {
        self.set_response(
            RecordKind::A,
            host,
            TargetServers::Default,
            addresses
                .iter()
                .map(|a| RawAnswer::Address {
                    address: a.parse().unwrap(),
                    ttl: 3600,
                })
                .collect(),
        );
    }

    /// Every query for `name` sleeps before answering.
    pub fn set_delay(&self, name: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(name.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, name: &str) -> Vec<RecordedQuery> {
        self.calls()
            .into_iter()
            .filter(|call| call.name == name)
            .collect()
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(
        &self,
        kind: RecordKind,
        name: &DomainName,
        target: &TargetServers,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        self.calls.lock().unwrap().push(RecordedQuery {
            kind,
            name: name.to_string(),
            target: target.clone(),
        });

        let delay = self.delays.lock().unwrap().get(&name.to_string()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .unwrap()
            .get(&(kind, name.to_string(), target.clone()))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn target(addresses: &[&str]) -> TargetServers {
    TargetServers::explicit(
        addresses
            .iter()
            .map(|a| SocketAddr::new(a.parse::<IpAddr>().unwrap(), 53))
            .collect::<Vec<_>>(),
    )
}

pub fn caa_issue(value: &str) -> RawAnswer {
    RawAnswer::Caa(CaaRecord::new(0, "issue", value))
}

pub fn type_resolver(mock: &MockRecordResolver) -> Arc<TypeResolver> {
    Arc::new(TypeResolver::new(Arc::new(mock.clone())))
}

pub fn query_use_case(mock: &MockRecordResolver) -> QueryAuthoritativeUseCase {
    QueryAuthoritativeUseCase::new(type_resolver(mock))
}

pub fn domain(name: &str) -> DomainName {
    DomainName::parse(name).unwrap()
}
