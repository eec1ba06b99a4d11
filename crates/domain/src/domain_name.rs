use crate::DomainError;
use std::fmt;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A validated, lowercased domain name without the trailing root dot.
///
/// Values are immutable; walking towards the root produces new names via
/// [`DomainName::parent`]. Backed by `Arc<str>` so clones across concurrent
/// per-kind queries stay cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        for label in trimmed.split('.') {
            validate_label(trimmed, label)?;
        }

        Ok(Self(Arc::from(trimmed.to_ascii_lowercase())))
    }

    /// True when the name still has at least one `.` separator, i.e. it is
    /// not a bare top-level label.
    pub fn has_parent(&self) -> bool {
        self.0.contains('.')
    }

    /// The name with its leftmost label stripped (`a.b.com` → `b.com`).
    pub fn parent(&self) -> Option<DomainName> {
        self.0
            .split_once('.')
            .map(|(_, rest)| DomainName(Arc::from(rest)))
    }

    /// Fully-qualified form with the trailing root dot, as used on the wire.
    pub fn to_fqdn(&self) -> String {
        format!("{}.", self.0)
    }
}

fn validate_label(name: &str, label: &str) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' contains an empty label",
            name
        )));
    }

    if label.len() > MAX_LABEL_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "label '{}' exceeds {} characters",
            label, MAX_LABEL_LEN
        )));
    }

    if let Some(c) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '*')))
    {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' contains invalid character '{}'",
            name, c
        )));
    }

    Ok(())
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
