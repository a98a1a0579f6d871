use super::name::{decode_name, encode_name};
use super::WireReader;
use rootwalk_domain::{DomainError, RecordType, CLASS_IN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// Question for `name` in class IN.
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype: record_type.to_u16(),
            qclass: CLASS_IN,
        }
    }

    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let name = decode_name(reader)?;
        let qtype = reader.read_u16()?;
        let qclass = reader.read_u16()?;
        Ok(Self {
            name,
            qtype,
            qclass,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = encode_name(&self.name)?;
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(buf)
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}
