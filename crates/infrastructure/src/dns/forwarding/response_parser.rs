use super::record_type_map::RecordTypeMapper;
use ferrous_dig_domain::record_format::{parse_caa_rdata, to_generic_hex};
use ferrous_dig_domain::{CaaRecord, DomainError, RawAnswer, RecordKind};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer-section records of the queried kind, in received order.
    pub answers: Vec<RawAnswer>,
}

impl DnsResponse {
    /// Maps the response code onto the answers: NOERROR yields them (possibly
    /// none), NXDOMAIN and every other code become errors.
    pub fn into_answers(self, server: SocketAddr) -> Result<Vec<RawAnswer>, DomainError> {
        match self.rcode {
            ResponseCode::NoError => Ok(self.answers),
            ResponseCode::NXDomain => Err(DomainError::NxDomain),
            rcode => Err(DomainError::ServerFailure {
                server: server.to_string(),
                rcode: ResponseParser::rcode_to_status(rcode),
            }),
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a response and keeps only answers of `kind`.
    pub fn parse(response_bytes: &[u8], kind: RecordKind) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is not a response".to_string(),
            ));
        }

        let rcode = message.response_code();
        let truncated = message.truncated();
        let wanted = RecordTypeMapper::to_hickory(kind);

        let answers: Vec<RawAnswer> = message
            .answers()
            .iter()
            .filter(|record| record.record_type() == wanted)
            .filter_map(Self::to_raw_answer)
            .collect();

        debug!(
            id = message.id(),
            rcode = Self::rcode_to_status(rcode),
            record_type = %kind,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    /// Like [`ResponseParser::parse`], rejecting a response whose ID does not
    /// belong to the query that was sent.
    pub fn parse_for_query(
        response_bytes: &[u8],
        expected_id: u16,
        kind: RecordKind,
    ) -> Result<DnsResponse, DomainError> {
        let response = Self::parse(response_bytes, kind)?;
        if response.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                response.id, expected_id
            )));
        }
        Ok(response)
    }

    fn to_raw_answer(record: &Record) -> Option<RawAnswer> {
        let ttl = record.ttl();
        match record.data() {
            RData::A(a) => Some(RawAnswer::Address {
                address: IpAddr::V4(a.0),
                ttl,
            }),
            RData::AAAA(aaaa) => Some(RawAnswer::Address {
                address: IpAddr::V6(aaaa.0),
                ttl,
            }),
            RData::CNAME(canonical) => Some(RawAnswer::Name(host_name(&canonical.0))),
            RData::NS(ns) => Some(RawAnswer::Name(host_name(&ns.0))),
            RData::MX(mx) => Some(RawAnswer::Mail {
                priority: mx.preference(),
                exchange: host_name(mx.exchange()),
            }),
            RData::TXT(txt) => Some(RawAnswer::Text(txt.txt_data().to_vec())),
            rdata @ RData::CAA(_) => Some(Self::caa_answer(rdata)),
            other => {
                debug!(record_type = ?other.record_type(), "Skipping unsupported answer");
                None
            }
        }
    }

    /// Re-encodes CAA RDATA and splits it; anything that does not split
    /// cleanly is handed on in RFC 3597 generic form.
    fn caa_answer(rdata: &RData) -> RawAnswer {
        match rdata.to_bytes() {
            Ok(bytes) => match parse_caa_rdata(&bytes) {
                Ok(record) => RawAnswer::Caa(record),
                Err(e) => {
                    debug!(error = %e, "CAA RDATA kept in generic form");
                    RawAnswer::CaaHex(to_generic_hex(&bytes))
                }
            },
            Err(e) => {
                debug!(error = %e, "Failed to re-encode CAA RDATA");
                RawAnswer::Caa(CaaRecord::default())
            }
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

fn host_name(name: &Name) -> Arc<str> {
    let text = name.to_utf8();
    Arc::from(text.strip_suffix('.').unwrap_or(&text))
}
