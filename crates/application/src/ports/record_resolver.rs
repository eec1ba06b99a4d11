use async_trait::async_trait;
use ferrous_dig_domain::{DomainError, DomainName, RawAnswer, RecordKind, TargetServers};

/// Sends one query of one kind for `name` to `target` and returns the
/// answer-section records of that kind, in received order.
///
/// A NOERROR response without matching answers is `Ok(vec![])`.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve(
        &self,
        kind: RecordKind,
        name: &DomainName,
        target: &TargetServers,
    ) -> Result<Vec<RawAnswer>, DomainError>;
}
