use super::{DomainError, RecordType};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Normalizes user input into a query: surrounding whitespace and one
    /// trailing dot are dropped. The root name alone is not a resolvable host.
    pub fn parse(domain: &str, record_type: RecordType) -> Result<Self, DomainError> {
        let trimmed = domain.trim();
        let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is empty",
                domain
            )));
        }
        if name.split('.').any(|label| label.is_empty()) {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                domain
            )));
        }

        Ok(Self::new(name, record_type))
    }
}
