use super::header::RECURSION_OFF;
use super::{Header, Question};
use rootwalk_domain::{DomainError, RecordType};

/// Builds the wire bytes of a single-question, non-recursive query.
pub fn build_query(id: u16, domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
    let header = Header {
        id,
        flags: RECURSION_OFF,
        num_questions: 1,
        num_answers: 0,
        num_authorities: 0,
        num_additionals: 0,
    };
    let question = Question::new(domain, record_type);

    let mut buf = header.to_bytes().to_vec();
    buf.extend_from_slice(&question.to_bytes()?);
    Ok(buf)
}

/// Random transaction ID for request/response matching.
pub fn random_id() -> u16 {
    fastrand::u16(..)
}
