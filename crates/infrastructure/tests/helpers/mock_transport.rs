use super::ResponseBuilder;
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use rootwalk_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use rootwalk_infrastructure::dns::wire::Message;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Mutex;

/// One question as it went out on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentQuery {
    pub server: SocketAddr,
    pub domain: String,
    pub qtype: u16,
}

/// In-memory nameservers keyed by (server address, queried name).
pub struct MockTransport {
    responses: Mutex<HashMap<(Ipv4Addr, String), ResponseBuilder>>,
    raw: Mutex<HashMap<Ipv4Addr, Vec<u8>>>,
    queries: Mutex<Vec<SentQuery>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            raw: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn on(self, server: Ipv4Addr, domain: &str, response: ResponseBuilder) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((server, domain.to_string()), response);
        self
    }

    /// Replies with `bytes` verbatim to anything sent to `server`.
    pub fn on_raw(self, server: Ipv4Addr, bytes: Vec<u8>) -> Self {
        self.raw.lock().unwrap().insert(server, bytes);
        self
    }

    pub fn queries(&self) -> Vec<SentQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn qtypes(&self) -> Vec<u16> {
        self.queries.lock().unwrap().iter().map(|q| q.qtype).collect()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn asked(&self, server: Ipv4Addr, domain: &str) -> bool {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .any(|q| q.server.ip() == IpAddr::V4(server) && q.domain == domain)
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        let request = Message::parse(message_bytes)?;
        let domain = request.questions[0].name.clone();
        self.queries.lock().unwrap().push(SentQuery {
            server,
            domain: domain.clone(),
            qtype: request.questions[0].qtype,
        });

        let ip = match server.ip() {
            IpAddr::V4(ip) => ip,
            IpAddr::V6(_) => {
                return Err(DomainError::TransportIo {
                    server: server.to_string(),
                    message: "IPv6 not served by mock".to_string(),
                })
            }
        };

        if let Some(bytes) = self.raw.lock().unwrap().get(&ip) {
            let mut bytes = bytes.clone();
            bytes[..2].copy_from_slice(&message_bytes[..2]);
            return Ok(TransportResponse {
                bytes,
                protocol_used: "MOCK",
            });
        }

        let responses = self.responses.lock().unwrap();
        match responses.get(&(ip, domain.clone())) {
            Some(builder) => Ok(TransportResponse {
                bytes: builder.build(message_bytes),
                protocol_used: "MOCK",
            }),
            None => Err(DomainError::TransportIo {
                server: server.to_string(),
                message: format!("no canned response for {}", domain),
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
