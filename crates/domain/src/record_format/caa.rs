//! CAA rendering and decoding.
//!
//! Two input forms reach the formatter: a decoded [`CaaRecord`] and the
//! RFC 3597 generic form (`\# <len> <hex>...`) produced when the RDATA could
//! not be split into flag, tag and value.

use crate::dns_record::{CaaProperty, CaaRecord};
use crate::DomainError;
use std::fmt::Write;

/// Marker that opens the RFC 3597 generic RDATA presentation.
pub const GENERIC_HEX_MARKER: &str = "\\#";

/// Renders properties in received order: the flags octet as `<n> `, every
/// other property as `<tag> "<value>"`.
pub fn format_caa(record: &CaaRecord) -> Result<String, DomainError> {
    if record.properties.is_empty() {
        return Err(malformed("record has no properties"));
    }

    let mut data = String::new();
    for property in &record.properties {
        match property {
            CaaProperty::Critical(flags) => {
                let _ = write!(data, "{} ", flags);
            }
            CaaProperty::Tag { name, value } => {
                if name.is_empty() {
                    return Err(malformed("empty property tag"));
                }
                let _ = write!(data, "{} \"{}\"", name, value);
            }
        }
    }

    Ok(data)
}

/// Best-effort decoder for CAA data delivered in generic hex form.
///
/// Drops the marker and length tokens, keeps printable ASCII from the
/// remaining hex tokens (the flag and tag-length octets fall out here), and
/// rewrites the first `issue` so the result reads `0 issue "<value>"`.
/// Assumes a single issue/issuewild property; other layouts come out
/// unchanged apart from the printable-byte filter and closing quote.
pub fn decode_caa_hex(data: &str) -> String {
    let printable: String = data
        .split(' ')
        .skip(2)
        .filter_map(|token| u32::from_str_radix(token, 16).ok())
        .filter(|byte| *byte > 31 && *byte < 127)
        .filter_map(char::from_u32)
        .collect();

    let mut decoded = printable.replacen("issue", "0 issue \"", 1);
    decoded.push('"');
    decoded
}

/// Splits CAA RDATA (RFC 8659 §4.1) into flags, tag and value.
pub fn parse_caa_rdata(rdata: &[u8]) -> Result<CaaRecord, DomainError> {
    let (&flags, rest) = rdata
        .split_first()
        .ok_or_else(|| malformed("missing flags octet"))?;
    let (&tag_len, rest) = rest
        .split_first()
        .ok_or_else(|| malformed("missing tag length"))?;

    let tag_len = tag_len as usize;
    if tag_len == 0 || tag_len > rest.len() {
        return Err(malformed("tag length out of bounds"));
    }

    let (tag, value) = rest.split_at(tag_len);
    if !tag.iter().all(u8::is_ascii_alphanumeric) {
        return Err(malformed("tag is not alphanumeric"));
    }

    let tag = String::from_utf8(tag.to_vec()).map_err(|e| malformed(&e.to_string()))?;
    let value = String::from_utf8(value.to_vec()).map_err(|e| malformed(&e.to_string()))?;

    Ok(CaaRecord::new(flags, tag.to_ascii_lowercase(), value))
}

/// RFC 3597 presentation of raw RDATA with space-separated octets.
pub fn to_generic_hex(rdata: &[u8]) -> String {
    let mut out = format!("{} {}", GENERIC_HEX_MARKER, rdata.len());
    for byte in rdata {
        let _ = write!(out, " {:02x}", byte);
    }
    out
}

fn malformed(reason: &str) -> DomainError {
    DomainError::MalformedRecord {
        kind: "CAA",
        reason: reason.to_string(),
    }
}
