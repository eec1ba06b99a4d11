use crate::ports::RecordResolver;
use ferrous_dig_domain::{
    format_records, DomainError, DomainName, FormattedRecord, RawAnswer, RecordKind,
    TargetServers,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Failure boundary for single queries: every error is logged here and
/// surfaces to callers only as `None`.
pub struct TypeResolver {
    resolver: Arc<dyn RecordResolver>,
}

impl TypeResolver {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    /// Formatted records of `kind`, `Some(vec![])` when the server has none.
    pub async fn resolve(
        &self,
        kind: RecordKind,
        name: &DomainName,
        target: &TargetServers,
    ) -> Option<Vec<FormattedRecord>> {
        let answers = self.query(kind, name, target).await?;
        Some(format_records(kind, &answers))
    }

    /// NS hostnames for `name`, without trailing dots.
    pub async fn name_servers(
        &self,
        name: &DomainName,
        target: &TargetServers,
    ) -> Option<Vec<String>> {
        let answers = self.query(RecordKind::NS, name, target).await?;
        Some(
            answers
                .into_iter()
                .filter_map(|answer| match answer {
                    RawAnswer::Name(host) => Some(host.to_string()),
                    _ => None,
                })
                .collect(),
        )
    }

    /// IPv4 addresses from an A lookup.
    pub async fn addresses(
        &self,
        name: &DomainName,
        target: &TargetServers,
    ) -> Option<Vec<IpAddr>> {
        let answers = self.query(RecordKind::A, name, target).await?;
        Some(
            answers
                .into_iter()
                .filter_map(|answer| match answer {
                    RawAnswer::Address {
                        address: address @ IpAddr::V4(_),
                        ..
                    } => Some(address),
                    _ => None,
                })
                .collect(),
        )
    }

    async fn query(
        &self,
        kind: RecordKind,
        name: &DomainName,
        target: &TargetServers,
    ) -> Option<Vec<RawAnswer>> {
        match self.resolver.resolve(kind, name, target).await {
            Ok(answers) => {
                debug!(
                    domain = %name,
                    record_type = %kind,
                    target = %target,
                    answers = answers.len(),
                    "Query answered"
                );
                Some(answers)
            }
            Err(DomainError::NxDomain) => {
                debug!(domain = %name, record_type = %kind, target = %target, "NXDOMAIN");
                None
            }
            Err(e) => {
                warn!(
                    domain = %name,
                    record_type = %kind,
                    target = %target,
                    error = %e,
                    "Query failed"
                );
                None
            }
        }
    }
}
