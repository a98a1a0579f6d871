use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError};
use std::fmt;
use std::net::Ipv4Addr;

/// One query sent while walking the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHop {
    pub nameserver: Ipv4Addr,
    pub domain: String,
    /// 0 for the top-level resolution, +1 per nested CNAME / NS-name lookup.
    pub depth: usize,
}

impl fmt::Display for QueryHop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:indent$}Querying {} for {}",
            "",
            self.nameserver,
            self.domain,
            indent = self.depth * 2
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    pub address: Ipv4Addr,
    /// Every query issued, in order, including nested sub-resolutions.
    pub hops: Vec<QueryHop>,
}

impl DnsResolution {
    pub fn new(address: Ipv4Addr, hops: Vec<QueryHop>) -> Self {
        Self { address, hops }
    }

    pub fn query_count(&self) -> usize {
        self.hops.len()
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;
}
