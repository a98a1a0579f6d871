pub mod udp;

use super::wire::{build_query, Message};
use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use tracing::{debug, warn};

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request datagram out, one response datagram back.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

/// Encodes `query` under transaction `id`, exchanges it with `server` and
/// decodes the reply.
pub async fn send_query(
    transport: &dyn DnsTransport,
    server: SocketAddr,
    id: u16,
    query: &DnsQuery,
) -> Result<Message, DomainError> {
    let request = build_query(id, &query.domain, query.record_type)?;
    let response = transport.send(server, &request).await?;

    validate_response_id(&request, &response.bytes, server)?;
    let message = Message::parse(&response.bytes)?;

    if !message.header.is_response() {
        return Err(DomainError::ProtocolViolation(format!(
            "reply from {} does not have the QR bit set",
            server
        )));
    }

    if message.header.is_truncated() {
        warn!(
            server = %server,
            domain = %query.domain,
            protocol = response.protocol_used,
            "Response has TC bit set; using the truncated message as-is"
        );
    }

    debug!(
        server = %server,
        header = %message.header,
        "Decoded response"
    );

    Ok(message)
}

/// Checks that the reply carries the transaction ID of the request.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    let expected = read_id(query)?;
    let received = read_id(response)?;

    if expected != received {
        return Err(DomainError::ResponseIdMismatch {
            server: server.to_string(),
            expected,
            received,
        });
    }
    Ok(())
}

fn read_id(message: &[u8]) -> Result<u16, DomainError> {
    match message {
        [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
        _ => Err(DomainError::TruncatedInput {
            needed: 2 - message.len(),
            offset: message.len(),
        }),
    }
}
