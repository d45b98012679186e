use async_trait::async_trait;
use dnsprobe_domain::DomainError;
use std::net::SocketAddr;

#[async_trait]
pub trait ServerAddressResolver: Send + Sync {
    /// Turns a server hostname or IP literal plus port into one endpoint.
    /// The address family of the result decides the socket family used later.
    async fn resolve(&self, server: &str, port: u16) -> Result<SocketAddr, DomainError>;
}
