//! Record Formatter: raw answers of one kind → uniform [`FormattedRecord`]s.

pub mod caa;

use crate::dns_record::{FormattedRecord, RawAnswer, RecordKind};
use crate::DomainError;
use std::net::IpAddr;

pub use caa::{decode_caa_hex, parse_caa_rdata, to_generic_hex};

/// Formats every answer for `kind`, preserving input order.
///
/// A single malformed answer empties the whole result for that kind; this
/// never returns a partial list and never panics.
pub fn format_records(kind: RecordKind, answers: &[RawAnswer]) -> Vec<FormattedRecord> {
    try_format_records(kind, answers).unwrap_or_default()
}

/// Like [`format_records`] but reports the first malformation.
pub fn try_format_records(
    kind: RecordKind,
    answers: &[RawAnswer],
) -> Result<Vec<FormattedRecord>, DomainError> {
    match kind {
        // NS answers are consumed as hostnames by the delegation walker.
        RecordKind::NS => Ok(Vec::new()),
        _ => answers
            .iter()
            .map(|answer| format_answer(kind, answer))
            .collect(),
    }
}

fn format_answer(kind: RecordKind, answer: &RawAnswer) -> Result<FormattedRecord, DomainError> {
    match kind {
        RecordKind::A | RecordKind::AAAA => match answer {
            RawAnswer::Address { address, ttl } if family_matches(kind, address) => {
                Ok(with_reported_ttl(kind, address.to_string(), *ttl))
            }
            _ => Err(unexpected(kind, answer)),
        },
        RecordKind::CNAME => match answer {
            RawAnswer::Name(target) => Ok(FormattedRecord::new(target.as_ref())),
            _ => Err(unexpected(kind, answer)),
        },
        RecordKind::MX => match answer {
            RawAnswer::Mail { priority, exchange } => {
                Ok(FormattedRecord::new(format!("{} {}", priority, exchange)))
            }
            _ => Err(unexpected(kind, answer)),
        },
        RecordKind::TXT => match answer {
            RawAnswer::Text(segments) => Ok(FormattedRecord::new(join_text(segments))),
            _ => Err(unexpected(kind, answer)),
        },
        RecordKind::CAA => match answer {
            RawAnswer::Caa(record) => caa::format_caa(record).map(FormattedRecord::new),
            RawAnswer::CaaHex(data) => Ok(FormattedRecord::new(decode_caa_hex(data))),
            _ => Err(unexpected(kind, answer)),
        },
        RecordKind::NS => Err(unexpected(kind, answer)),
    }
}

fn family_matches(kind: RecordKind, address: &IpAddr) -> bool {
    matches!(
        (kind, address),
        (RecordKind::A, IpAddr::V4(_)) | (RecordKind::AAAA, IpAddr::V6(_))
    )
}

fn with_reported_ttl(kind: RecordKind, data: String, ttl: u32) -> FormattedRecord {
    if kind.reports_ttl() {
        FormattedRecord::with_ttl(data, ttl)
    } else {
        FormattedRecord::new(data)
    }
}

/// Character-strings are arbitrary octets; invalid UTF-8 is replaced, never rejected.
fn join_text(segments: &[Box<[u8]>]) -> String {
    segments
        .iter()
        .map(|segment| String::from_utf8_lossy(segment))
        .collect::<Vec<_>>()
        .join(" ")
}

fn unexpected(kind: RecordKind, answer: &RawAnswer) -> DomainError {
    DomainError::MalformedRecord {
        kind: kind.as_str(),
        reason: format!("unexpected {} answer", answer.shape()),
    }
}
