//! DNS Message Builder
//!
//! Constructs query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_dig_domain::{DomainError, DomainName, RecordKind};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random ID and the RD flag set.
    ///
    /// Returns the message ID together with the serialized bytes so the
    /// caller can match the response.
    pub fn build_query(
        domain: &DomainName,
        kind: RecordKind,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        Self::build_query_with_id(fastrand::u16(..), domain, kind)
    }

    pub fn build_query_with_id(
        id: u16,
        domain: &DomainName,
        kind: RecordKind,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&domain.to_fqdn()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(kind));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
