//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). The reply is read into a fixed-size
//! buffer; anything beyond it is dropped by the socket, and no TCP retry is
//! attempted when the TC bit comes back set.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Receive buffer size: enough for typical root and TLD referrals.
pub const DEFAULT_RECV_BUFFER: usize = 1024;

/// DNS over UDP transport
pub struct UdpTransport {
    timeout: Option<Duration>,
    recv_buffer_size: usize,
}

impl UdpTransport {
    /// Transport without a deadline: a silent nameserver blocks the caller.
    pub fn new() -> Self {
        Self {
            timeout: None,
            recv_buffer_size: DEFAULT_RECV_BUFFER,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn recv_buffer_size(&self) -> usize {
        self.recv_buffer_size
    }

    async fn with_deadline<T>(
        &self,
        server: SocketAddr,
        action: &'static str,
        fut: impl Future<Output = io::Result<T>>,
    ) -> Result<T, DomainError> {
        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, fut)
                .await
                .map_err(|_| DomainError::QueryTimeout {
                    server: server.to_string(),
                })?,
            None => fut.await,
        };

        result.map_err(|e| DomainError::TransportIo {
            server: server.to_string(),
            message: format!("{} failed: {}", action, e),
        })
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::TransportIo {
                server: server.to_string(),
                message: format!("bind failed: {}", e),
            })?;

        let bytes_sent = self
            .with_deadline(server, "send", socket.send_to(message_bytes, server))
            .await?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.recv_buffer_size];
        let (bytes_received, from_addr) = self
            .with_deadline(server, "receive", socket.recv_from(&mut recv_buf))
            .await?;

        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server,
            bytes_received = bytes_received,
            buffer_full = bytes_received == self.recv_buffer_size,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
