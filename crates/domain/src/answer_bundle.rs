use crate::dns_record::{FormattedRecord, RecordKind};
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::IpAddr;

/// What one authoritative name server returned for the looked-up name.
///
/// `records` only holds kinds that produced at least one formatted record;
/// a server whose addresses could not be resolved carries no addresses and
/// no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerAnswerBundle {
    #[serde(rename = "nameServer")]
    pub name_server: String,
    #[serde(rename = "nameServerIPs")]
    pub name_server_addresses: Vec<IpAddr>,
    pub records: BTreeMap<RecordKind, Vec<FormattedRecord>>,
}

impl ServerAnswerBundle {
    pub fn new(name_server: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        Self {
            name_server: name_server.into(),
            name_server_addresses: addresses,
            records: BTreeMap::new(),
        }
    }

    /// Adds records for `kind`; an empty list leaves the key absent.
    pub fn insert_records(&mut self, kind: RecordKind, records: Vec<FormattedRecord>) {
        if !records.is_empty() {
            self.records.insert(kind, records);
        }
    }

    /// False for a server whose own addresses could not be determined.
    pub fn is_resolved(&self) -> bool {
        !self.name_server_addresses.is_empty()
    }
}
