use async_trait::async_trait;
use dnsprobe_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one message and waits at most `timeout` for one reply.
    ///
    /// The returned buffer holds exactly the bytes received, never more.
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
