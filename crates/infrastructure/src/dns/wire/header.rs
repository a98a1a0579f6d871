use super::WireReader;
use rootwalk_domain::DomainError;
use std::fmt;

pub const HEADER_LEN: usize = 12;

/// RD bit. Queries built here leave it cleared: the resolver walks the
/// delegation chain itself.
pub const RECURSION_DESIRED: u16 = 1 << 8;
pub const RECURSION_OFF: u16 = 0;

const QR_BIT: u16 = 1 << 15;
const TC_BIT: u16 = 1 << 9;
const RCODE_MASK: u16 = 0x000F;

pub const RCODE_NXDOMAIN: u8 = 3;

/// DNS message header (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
}

impl Header {
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            num_questions: reader.read_u16()?,
            num_answers: reader.read_u16()?,
            num_authorities: reader.read_u16()?,
            num_additionals: reader.read_u16()?,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        let fields = [
            self.id,
            self.flags,
            self.num_questions,
            self.num_answers,
            self.num_authorities,
            self.num_additionals,
        ];
        for (chunk, field) in buf.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        buf
    }

    pub fn is_response(&self) -> bool {
        self.flags & QR_BIT != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & TC_BIT != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & RECURSION_DESIRED != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} flags={:#06x} qd={} an={} ns={} ar={}",
            self.id,
            self.flags,
            self.num_questions,
            self.num_answers,
            self.num_authorities,
            self.num_additionals
        )
    }
}
