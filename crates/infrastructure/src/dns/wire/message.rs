use super::header::RCODE_NXDOMAIN;
use super::{Header, Question, Record, RecordData, WireReader};
use rootwalk_domain::DomainError;
use std::net::Ipv4Addr;

/// A fully decoded DNS message (RFC 1035 §4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl Message {
    /// Decodes every section declared by the header with one shared cursor, so
    /// names in later sections may point back into earlier ones.
    ///
    /// Running out of bytes before the declared counts are met, or bytes left
    /// over once they are, both fail the decode.
    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        let mut reader = WireReader::new(buf);
        let header = Header::parse(&mut reader)?;

        let questions = (0..header.num_questions)
            .map(|_| Question::parse(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = parse_records(&mut reader, header.num_answers)?;
        let authorities = parse_records(&mut reader, header.num_authorities)?;
        let additionals = parse_records(&mut reader, header.num_additionals)?;

        if reader.remaining() > 0 {
            return Err(DomainError::TrailingData {
                remaining: reader.remaining(),
            });
        }

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    /// Address from the first A record in the answer section.
    pub fn answer(&self) -> Option<Ipv4Addr> {
        self.answers.iter().find_map(Record::ipv4)
    }

    /// Target of the first CNAME record in the answer section.
    pub fn canonical_name(&self) -> Option<&str> {
        self.answers.iter().find_map(|record| match &record.data {
            RecordData::Cname(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Glue: address from the first A record in the additional section.
    pub fn glue(&self) -> Option<Ipv4Addr> {
        self.additionals.iter().find_map(Record::ipv4)
    }

    /// Name from the first NS record in the authority section.
    pub fn nameserver(&self) -> Option<&str> {
        self.authorities.iter().find_map(|record| match &record.data {
            RecordData::Ns(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn is_nxdomain(&self) -> bool {
        self.header.rcode() == RCODE_NXDOMAIN
    }
}

fn parse_records(reader: &mut WireReader<'_>, count: u16) -> Result<Vec<Record>, DomainError> {
    (0..count).map(|_| Record::parse(reader)).collect()
}
