use crate::dns::resolver::step::{classify, Step};
use crate::dns::transport::{send_query, DnsTransport, UdpTransport};
use crate::dns::wire::random_id;
use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolution, DnsResolver, QueryHop};
use rootwalk_domain::{DnsQuery, DomainError, RecordType, ResolverConfig};
use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info};

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<Ipv4Addr, DomainError>> + Send + 'a>>;

/// Walks the delegation chain from a root nameserver, one query at a time.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    config: ResolverConfig,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, config: ResolverConfig) -> Self {
        info!(
            root = %config.root_server,
            port = config.port,
            max_depth = config.max_depth,
            transport = transport.protocol_name(),
            "Iterative resolver created"
        );

        Self { transport, config }
    }

    /// Resolver over UDP with the deadline and buffer size from `config`.
    pub fn from_config(config: ResolverConfig) -> Self {
        let transport = UdpTransport::new()
            .with_timeout(config.query_timeout())
            .with_recv_buffer_size(config.recv_buffer_size);
        Self::new(Arc::new(transport), config)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves `domain` to an IPv4 address starting from the root server.
    pub async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResolution, DomainError> {
        let mut hops = Vec::new();
        let address = self
            .walk(DnsQuery::new(domain, record_type), 0, &mut hops)
            .await?;
        Ok(DnsResolution::new(address, hops))
    }

    fn walk<'a>(
        &'a self,
        query: DnsQuery,
        depth: usize,
        hops: &'a mut Vec<QueryHop>,
    ) -> WalkFuture<'a> {
        Box::pin(async move {
            if depth > self.config.max_depth {
                return Err(DomainError::ResolutionDepthExceeded {
                    limit: self.config.max_depth,
                });
            }

            let mut nameserver = self.config.root_server;

            for _ in 0..self.config.max_iterations {
                if hops.len() >= self.config.max_queries {
                    return Err(DomainError::QueryBudgetExhausted {
                        limit: self.config.max_queries,
                    });
                }

                info!(
                    nameserver = %nameserver,
                    domain = %query.domain,
                    depth = depth,
                    "Querying {} for {}",
                    nameserver,
                    query.domain
                );
                hops.push(QueryHop {
                    nameserver,
                    domain: query.domain.to_string(),
                    depth,
                });

                let server = SocketAddr::from((nameserver, self.config.port));
                let response =
                    send_query(self.transport.as_ref(), server, random_id(), &query).await?;

                match classify(&response, &query.domain)? {
                    Step::Answered(address) => {
                        debug!(domain = %query.domain, address = %address, "Answered");
                        return Ok(address);
                    }
                    Step::Aliased(canonical) => {
                        debug!(domain = %query.domain, canonical = %canonical, "Following CNAME");
                        let alias = DnsQuery::new(canonical, RecordType::A);
                        return self.walk(alias, depth + 1, hops).await;
                    }
                    Step::Delegated(address) => {
                        if address == nameserver {
                            return Err(DomainError::ProtocolViolation(format!(
                                "{} referred {} back to itself",
                                nameserver, query.domain
                            )));
                        }
                        debug!(domain = %query.domain, next = %address, "Referral with glue");
                        nameserver = address;
                    }
                    Step::DelegatedByName(name) => {
                        debug!(domain = %query.domain, nameserver = %name, "Referral without glue");
                        let lookup = DnsQuery::new(name, RecordType::A);
                        nameserver = self.walk(lookup, depth + 1, hops).await?;
                    }
                }
            }

            Err(DomainError::IterationLimitExceeded {
                limit: self.config.max_iterations,
            })
        })
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.lookup(&query.domain, query.record_type).await
    }
}
