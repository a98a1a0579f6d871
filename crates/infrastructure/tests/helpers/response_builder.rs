use rootwalk_infrastructure::dns::wire::encode_name;
use std::net::Ipv4Addr;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;

/// Builds canned response datagrams that echo the request's ID and question.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    rcode: u16,
    truncated: bool,
    mismatched_id: bool,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_a(mut self, name: &str, address: Ipv4Addr) -> Self {
        self.answers.push(record(name, TYPE_A, address.octets().to_vec()));
        self
    }

    pub fn answer_cname(mut self, name: &str, target: &str) -> Self {
        self.answers.push(record(name, TYPE_CNAME, name_bytes(target)));
        self
    }

    pub fn answer_ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.answers.push(record(zone, TYPE_NS, name_bytes(nameserver)));
        self
    }

    pub fn authority_ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.authorities
            .push(record(zone, TYPE_NS, name_bytes(nameserver)));
        self
    }

    pub fn glue_a(mut self, name: &str, address: Ipv4Addr) -> Self {
        self.additionals
            .push(record(name, TYPE_A, address.octets().to_vec()));
        self
    }

    /// Referral to `nameserver` for `zone`, with glue for it.
    pub fn referral(self, zone: &str, nameserver: &str, address: Ipv4Addr) -> Self {
        self.authority_ns(zone, nameserver).glue_a(nameserver, address)
    }

    pub fn nxdomain(mut self) -> Self {
        self.rcode = 3;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    /// Replies with the request ID plus one.
    pub fn mismatched_id(mut self) -> Self {
        self.mismatched_id = true;
        self
    }

    pub fn build(&self, request: &[u8]) -> Vec<u8> {
        let mut id = u16::from_be_bytes([request[0], request[1]]);
        if self.mismatched_id {
            id = id.wrapping_add(1);
        }
        let mut flags = 0x8000 | self.rcode;
        if self.truncated {
            flags |= 1 << 9;
        }

        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&id.to_be_bytes());
        out.extend_from_slice(&flags.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authorities.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.additionals.len() as u16).to_be_bytes());
        out.extend_from_slice(&request[12..]);

        for section in [&self.answers, &self.authorities, &self.additionals] {
            for rr in section.iter() {
                out.extend_from_slice(rr);
            }
        }
        out
    }
}

fn name_bytes(name: &str) -> Vec<u8> {
    encode_name(name).unwrap()
}

fn record(name: &str, rtype: u16, data: Vec<u8>) -> Vec<u8> {
    let mut out = name_bytes(name);
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&300i32.to_be_bytes());
    out.extend_from_slice(&(data.len() as u16).to_be_bytes());
    out.extend_from_slice(&data);
    out
}
