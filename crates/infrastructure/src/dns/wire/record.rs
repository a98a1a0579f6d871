use super::name::decode_name;
use super::WireReader;
use rootwalk_domain::{DomainError, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// Type-dependent payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Ns(String),
    Cname(String),
    /// Any type this resolver does not interpret, kept verbatim.
    Other(Vec<u8>),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) | RecordData::Cname(name) => write!(f, "{}", name),
            RecordData::Other(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// Resource record (RFC 1035 §4.1.3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: i32,
    pub data_length: u16,
    pub data: RecordData,
}

impl Record {
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let name = decode_name(reader)?;
        let rtype = reader.read_u16()?;
        let class = reader.read_u16()?;
        let ttl = reader.read_i32()?;
        let data_length = reader.read_u16()?;

        let data_offset = reader.position();
        let raw = reader.read_bytes(data_length as usize)?;
        let data_end = reader.position();

        let data = match RecordType::from_u16(rtype) {
            Some(RecordType::A) => {
                let octets: [u8; 4] = raw.try_into().map_err(|_| {
                    DomainError::InvalidRecordData(format!(
                        "A record for '{}' carries {} bytes, expected 4",
                        name, data_length
                    ))
                })?;
                RecordData::A(Ipv4Addr::from(octets))
            }
            Some(kind @ (RecordType::NS | RecordType::CNAME)) => {
                // Decode against the whole message: the target may point
                // anywhere before this record, not only into its own data.
                reader.seek(data_offset)?;
                let target = decode_name(reader)?;
                if reader.position() > data_end {
                    return Err(DomainError::InvalidRecordData(format!(
                        "{} target for '{}' overruns its {}-byte data",
                        kind, name, data_length
                    )));
                }
                reader.seek(data_end)?;

                if kind == RecordType::NS {
                    RecordData::Ns(target)
                } else {
                    RecordData::Cname(target)
                }
            }
            None => RecordData::Other(raw.to_vec()),
        };

        Ok(Self {
            name,
            rtype,
            class,
            ttl,
            data_length,
            data,
        })
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(addr) => Some(addr),
            _ => None,
        }
    }
}
