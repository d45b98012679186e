use async_trait::async_trait;
use dnsprobe_application::ports::ServerAddressResolver;
use dnsprobe_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Resolves the server argument with the system resolver.
///
/// IP literals are used directly; hostnames go through `lookup_host` and
/// the first address returned wins.
#[derive(Debug, Clone)]
pub struct SystemAddressResolver {
    timeout: Duration,
}

impl SystemAddressResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ServerAddressResolver for SystemAddressResolver {
    async fn resolve(&self, server: &str, port: u16) -> Result<SocketAddr, DomainError> {
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, port));
        }

        let target = format!("{}:{}", server, port);

        let mut addrs = tokio::time::timeout(self.timeout, tokio::net::lookup_host(&target))
            .await
            .map_err(|_| {
                DomainError::AddressResolutionFailed(format!("Timed out resolving {}", target))
            })?
            .map_err(|e| {
                DomainError::AddressResolutionFailed(format!(
                    "Resolution failed for {}: {}",
                    target, e
                ))
            })?;

        let addr = addrs.next().ok_or_else(|| {
            DomainError::AddressResolutionFailed(format!("No addresses found for {}", target))
        })?;

        debug!(server = %server, resolved = %addr, "Server address resolved");
        Ok(addr)
    }
}
