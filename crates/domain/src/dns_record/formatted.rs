use serde::Serialize;

/// Uniform display shape for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedRecord {
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl FormattedRecord {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ttl: None,
        }
    }

    pub fn with_ttl(data: impl Into<String>, ttl: u32) -> Self {
        Self {
            data: data.into(),
            ttl: Some(ttl),
        }
    }
}
