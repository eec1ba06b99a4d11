use serde::{Serialize, Serializer};
use std::fmt;

/// The closed set of record kinds this service queries.
///
/// Declaration order doubles as the output order of a bundle's `records` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    CAA,
    NS,
}

impl RecordKind {
    /// Kinds queried directly against each authoritative server (everything but NS).
    pub const AUTHORITATIVE: [RecordKind; 6] = [
        RecordKind::A,
        RecordKind::AAAA,
        RecordKind::CNAME,
        RecordKind::MX,
        RecordKind::TXT,
        RecordKind::CAA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::MX => "MX",
            RecordKind::TXT => "TXT",
            RecordKind::CAA => "CAA",
            RecordKind::NS => "NS",
        }
    }

    /// Key used in the JSON `records` mapping.
    pub fn short_key(&self) -> &'static str {
        match self {
            RecordKind::A => "a",
            RecordKind::AAAA => "aaaa",
            RecordKind::CNAME => "cname",
            RecordKind::MX => "mx",
            RecordKind::TXT => "txt",
            RecordKind::CAA => "caa",
            RecordKind::NS => "ns",
        }
    }

    /// Only address kinds report a TTL in formatted output.
    pub fn reports_ttl(&self) -> bool {
        matches!(self, RecordKind::A | RecordKind::AAAA)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_key())
    }
}
