//! Hand-assembled DNS wire messages for the mock servers.

/// The parts of an incoming query the mock servers dispatch on.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    pub id: u16,
    pub name: String,
    pub qtype: u16,
    /// Question section as received, echoed back in the reply.
    pub question: Vec<u8>,
}

impl ParsedQuery {
    pub fn parse(query: &[u8]) -> Option<Self> {
        if query.len() < 12 {
            return None;
        }
        let id = u16::from_be_bytes([query[0], query[1]]);

        let mut pos = 12;
        let mut labels = Vec::new();
        loop {
            let len = *query.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            let label = query.get(pos..pos + len)?;
            labels.push(String::from_utf8_lossy(label).to_lowercase());
            pos += len;
        }
        let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
        let question = query.get(12..pos + 4)?.to_vec();

        Some(Self {
            id,
            name: labels.join("."),
            qtype,
            question,
        })
    }
}

/// One answer record; the owner name always points back at the question.
#[derive(Debug, Clone)]
pub struct WireAnswer {
    pub rtype: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn a_answer(ip: [u8; 4], ttl: u32) -> WireAnswer {
    WireAnswer {
        rtype: 1,
        ttl,
        rdata: ip.to_vec(),
    }
}

pub fn aaaa_answer(ip: std::net::Ipv6Addr, ttl: u32) -> WireAnswer {
    WireAnswer {
        rtype: 28,
        ttl,
        rdata: ip.octets().to_vec(),
    }
}

pub fn ns_answer(host: &str) -> WireAnswer {
    WireAnswer {
        rtype: 2,
        ttl: 3600,
        rdata: encode_name(host),
    }
}

pub fn cname_answer(target: &str) -> WireAnswer {
    WireAnswer {
        rtype: 5,
        ttl: 300,
        rdata: encode_name(target),
    }
}

pub fn mx_answer(preference: u16, exchange: &str) -> WireAnswer {
    let mut rdata = preference.to_be_bytes().to_vec();
    rdata.extend(encode_name(exchange));
    WireAnswer {
        rtype: 15,
        ttl: 300,
        rdata,
    }
}

pub fn txt_answer(segments: &[&str]) -> WireAnswer {
    let mut rdata = Vec::new();
    for segment in segments {
        rdata.push(segment.len() as u8);
        rdata.extend_from_slice(segment.as_bytes());
    }
    WireAnswer {
        rtype: 16,
        ttl: 300,
        rdata,
    }
}

pub fn caa_answer(flags: u8, tag: &str, value: &str) -> WireAnswer {
    let mut rdata = vec![flags, tag.len() as u8];
    rdata.extend_from_slice(tag.as_bytes());
    rdata.extend_from_slice(value.as_bytes());
    WireAnswer {
        rtype: 257,
        ttl: 300,
        rdata,
    }
}

/// Builds a response to `query` with the given rcode, TC flag and answers.
pub fn build_response(
    query: &ParsedQuery,
    rcode: u8,
    truncated: bool,
    answers: &[WireAnswer],
) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query.id.to_be_bytes());

    // QR | RD (+ TC)
    let mut flags_hi = 0x81;
    if truncated {
        flags_hi |= 0x02;
    }
    response.push(flags_hi);
    // RA + rcode
    response.push(0x80 | (rcode & 0x0f));

    response.extend_from_slice(&1u16.to_be_bytes());
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&0u16.to_be_bytes());
    response.extend_from_slice(&0u16.to_be_bytes());

    response.extend_from_slice(&query.question);

    for answer in answers {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&answer.rtype.to_be_bytes());
        response.extend_from_slice(&1u16.to_be_bytes());
        response.extend_from_slice(&answer.ttl.to_be_bytes());
        response.extend_from_slice(&(answer.rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&answer.rdata);
    }

    response
}
