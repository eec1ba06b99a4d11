use std::net::IpAddr;
use std::sync::Arc;

/// One answer record as decoded from the wire, before display formatting.
///
/// Shapes follow the record data rather than the queried kind; the formatter
/// rejects a shape that does not belong to the kind it is asked to format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAnswer {
    Address { address: IpAddr, ttl: u32 },
    /// Target of a CNAME or host of an NS record, without the trailing dot.
    Name(Arc<str>),
    Mail { priority: u16, exchange: Arc<str> },
    /// Character-strings of a TXT record, as received.
    Text(Vec<Box<[u8]>>),
    Caa(CaaRecord),
    /// CAA data in RFC 3597 generic form: `\# <len> <hex> <hex> ...`.
    CaaHex(String),
}

impl RawAnswer {
    pub fn shape(&self) -> &'static str {
        match self {
            RawAnswer::Address { .. } => "address",
            RawAnswer::Name(_) => "name",
            RawAnswer::Mail { .. } => "mail",
            RawAnswer::Text(_) => "text",
            RawAnswer::Caa(_) | RawAnswer::CaaHex(_) => "caa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaaProperty {
    /// The flags octet; rendered before the tag.
    Critical(u8),
    Tag { name: String, value: String },
}

/// A decoded CAA record, properties kept in received order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaaRecord {
    pub properties: Vec<CaaProperty>,
}

impl CaaRecord {
    pub fn new(flags: u8, tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            properties: vec![
                CaaProperty::Critical(flags),
                CaaProperty::Tag {
                    name: tag.into(),
                    value: value.into(),
                },
            ],
        }
    }
}
