use ferrous_dig_domain::{CaaRecord, RawAnswer};
use std::net::IpAddr;
use std::sync::Arc;

pub fn address(ip: &str, ttl: u32) -> RawAnswer {
    RawAnswer::Address {
        address: ip.parse::<IpAddr>().unwrap(),
        ttl,
    }
}

pub fn name(target: &str) -> RawAnswer {
    RawAnswer::Name(Arc::from(target))
}

pub fn mail(priority: u16, exchange: &str) -> RawAnswer {
    RawAnswer::Mail {
        priority,
        exchange: Arc::from(exchange),
    }
}

pub fn text(segments: &[&str]) -> RawAnswer {
    RawAnswer::Text(
        segments
            .iter()
            .map(|s| s.as_bytes().to_vec().into_boxed_slice())
            .collect(),
    )
}

pub fn caa(flags: u8, tag: &str, value: &str) -> RawAnswer {
    RawAnswer::Caa(CaaRecord::new(flags, tag, value))
}

/// CAA RDATA for a single property, rendered in RFC 3597 generic form.
pub fn caa_hex(flags: u8, tag: &str, value: &str) -> RawAnswer {
    let mut rdata = vec![flags, tag.len() as u8];
    rdata.extend_from_slice(tag.as_bytes());
    rdata.extend_from_slice(value.as_bytes());
    RawAnswer::CaaHex(ferrous_dig_domain::record_format::to_generic_hex(&rdata))
}
