//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing), one datagram out and one back.
//! A response with the TC bit set is returned like any other; retrying over
//! TCP is left to the caller.

use async_trait::async_trait;
use dnsprobe_application::ports::DnsTransport;
use dnsprobe_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Receive buffer size when none is configured (EDNS(0) sized).
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
#[derive(Debug, Clone)]
pub struct UdpTransport {
    max_response_size: usize,
}

impl UdpTransport {
    pub fn new(max_response_size: usize) -> Self {
        Self { max_response_size }
    }

    pub fn max_response_size(&self) -> usize {
        self.max_response_size
    }

    /// Ephemeral local address in the same family as `server`.
    fn bind_addr(server: SocketAddr) -> SocketAddr {
        if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESPONSE_SIZE)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind(Self::bind_addr(server))
            .await
            .map_err(|e| DomainError::SocketError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| DomainError::Timeout {
                server: server.to_string(),
            })?
            .map_err(|e| {
                DomainError::SendError(format!("Failed to send UDP query to {}: {}", server, e))
            })?;

        if bytes_sent != message_bytes.len() {
            return Err(DomainError::SendError(format!(
                "Short send to {}: {} of {} bytes",
                server,
                bytes_sent,
                message_bytes.len()
            )));
        }

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.max_response_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::Timeout {
                    server: server.to_string(),
                })?
                .map_err(|e| {
                    DomainError::ReceiveError(format!(
                        "Failed to receive UDP response from {}: {}",
                        server, e
                    ))
                })?;

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
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
