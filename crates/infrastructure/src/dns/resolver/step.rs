use crate::dns::wire::Message;
use rootwalk_domain::DomainError;
use std::net::Ipv4Addr;

/// What a single response tells the resolver to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// An A record answered the question.
    Answered(Ipv4Addr),
    /// The name is an alias; resolve the canonical name from the root.
    Aliased(String),
    /// Referral with glue: ask this address next.
    Delegated(Ipv4Addr),
    /// Referral without glue: resolve this nameserver name first.
    DelegatedByName(String),
}

/// Picks the next step from a response, in precedence order: answer, alias,
/// glue, then authority.
pub fn classify(message: &Message, domain: &str) -> Result<Step, DomainError> {
    if let Some(address) = message.answer() {
        return Ok(Step::Answered(address));
    }
    if let Some(canonical) = message.canonical_name() {
        return Ok(Step::Aliased(canonical.to_string()));
    }
    if let Some(address) = message.glue() {
        return Ok(Step::Delegated(address));
    }
    if let Some(nameserver) = message.nameserver() {
        return Ok(Step::DelegatedByName(nameserver.to_string()));
    }

    if message.is_nxdomain() {
        return Err(DomainError::NxDomain(domain.to_string()));
    }
    Err(DomainError::ProtocolViolation(format!(
        "response for {} has no answer, glue or authority record",
        domain
    )))
}
