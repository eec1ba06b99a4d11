#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use ferrous_dig_api::{create_app, AppState};
use ferrous_dig_application::ports::RecordResolver;
use ferrous_dig_application::services::TypeResolver;
use ferrous_dig_application::use_cases::QueryAuthoritativeUseCase;
use ferrous_dig_domain::{DomainError, DomainName, RawAnswer, RecordKind, TargetServers};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers from a fixed table keyed by (kind, name); explicit targets are
/// ignored. Unknown lookups are NXDOMAIN.
#[derive(Clone, Default)]
pub struct StaticRecordResolver {
    records: Arc<Mutex<HashMap<(RecordKind, String), Vec<RawAnswer>>>>,
    queried: Arc<Mutex<Vec<String>>>,
}

impl StaticRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, kind: RecordKind, name: &str, answers: Vec<RawAnswer>) {
        self.records
            .lock()
            .unwrap()
            .insert((kind, name.to_string()), answers);
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordResolver for StaticRecordResolver {
    async fn resolve(
        &self,
        kind: RecordKind,
        name: &DomainName,
        _target: &TargetServers,
    ) -> Result<Vec<RawAnswer>, DomainError> {
        self.queried.lock().unwrap().push(name.to_string());
        self.records
            .lock()
            .unwrap()
            .get(&(kind, name.to_string()))
            .cloned()
            .ok_or(DomainError::NxDomain)
    }
}

pub fn example_com_resolver() -> StaticRecordResolver {
    let resolver = StaticRecordResolver::new();
    resolver.insert(
        RecordKind::NS,
        "example.com",
        vec![RawAnswer::Name(Arc::from("ns1.example.com"))],
    );
    resolver.insert(
        RecordKind::A,
        "ns1.example.com",
        vec![RawAnswer::Address {
            address: "192.0.2.53".parse().unwrap(),
            ttl: 3600,
        }],
    );
    resolver.insert(
        RecordKind::A,
        "example.com",
        vec![RawAnswer::Address {
            address: "93.184.216.34".parse().unwrap(),
            ttl: 300,
        }],
    );
    resolver.insert(
        RecordKind::MX,
        "example.com",
        vec![RawAnswer::Mail {
            priority: 10,
            exchange: Arc::from("mail.example.com"),
        }],
    );
    resolver.insert(RecordKind::TXT, "example.com", Vec::new());
    resolver
}

pub fn create_test_app(resolver: StaticRecordResolver, origins: &[&str]) -> Router {
    let type_resolver = Arc::new(TypeResolver::new(Arc::new(resolver)));
    let state = AppState {
        query_authoritative: Arc::new(QueryAuthoritativeUseCase::new(type_resolver)),
    };
    let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
    create_app(state, &origins)
}
