use crate::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub struct ResolveHostUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveHostUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Validates raw user input, then walks the hierarchy for it.
    ///
    /// Unknown record types and malformed names are rejected here, before any
    /// datagram is sent.
    pub async fn execute(
        &self,
        domain: &str,
        record_type: &str,
    ) -> Result<DnsResolution, DomainError> {
        let record_type: RecordType = record_type.parse()?;
        let query = DnsQuery::parse(domain, record_type)?;

        let start = Instant::now();
        let result = self.resolver.resolve(&query).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(resolution) => info!(
                domain = %query.domain,
                record_type = %query.record_type,
                address = %resolution.address,
                queries = resolution.query_count(),
                elapsed_ms = elapsed_ms,
                "Resolved"
            ),
            Err(e) => debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                error = %e,
                elapsed_ms = elapsed_ms,
                "Resolution failed"
            ),
        }

        result
    }
}
