#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolution, DnsResolver, QueryHop};
use rootwalk_domain::{DnsQuery, DomainError};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, DnsResolution>>>,
    error_responses: Arc<RwLock<HashMap<String, DomainError>>>,
    queries: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_address(&self, domain: &str, address: Ipv4Addr) {
        let hop = QueryHop {
            nameserver: Ipv4Addr::new(198, 41, 0, 4),
            domain: domain.to_string(),
            depth: 0,
        };
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), DnsResolution::new(address, vec![hop]));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.error_responses
            .write()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn queries(&self) -> Vec<DnsQuery> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.queries.write().unwrap().push(query.clone());

        if let Some(error) = self.error_responses.read().unwrap().get(&*query.domain) {
            return Err(error.clone());
        }

        self.responses
            .read()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .ok_or_else(|| DomainError::ProtocolViolation(format!("no fixture for {}", query.domain)))
    }
}
