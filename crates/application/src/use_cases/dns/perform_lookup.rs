use crate::ports::{DnsTransport, MessageCodec, ServerAddressResolver};
use dnsprobe_domain::{DnsQuery, DnsResponse, DomainError};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Everything one lookup produced, raw packets included.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub server: SocketAddr,
    pub query_bytes: Vec<u8>,
    pub response_bytes: Vec<u8>,
    pub response: DnsResponse,
}

/// One query, one response: resolve the server, encode, exchange, decode.
///
/// There is no retry; the first error ends the lookup.
pub struct PerformLookupUseCase {
    resolver: Arc<dyn ServerAddressResolver>,
    transport: Arc<dyn DnsTransport>,
    codec: Arc<dyn MessageCodec>,
    timeout: Duration,
}

impl PerformLookupUseCase {
    pub fn new(
        resolver: Arc<dyn ServerAddressResolver>,
        transport: Arc<dyn DnsTransport>,
        codec: Arc<dyn MessageCodec>,
        timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            transport,
            codec,
            timeout,
        }
    }

    pub async fn execute(
        &self,
        server: &str,
        port: u16,
        query: &DnsQuery,
    ) -> Result<LookupOutcome, DomainError> {
        let start = Instant::now();

        // Encoding errors surface before any network activity.
        let encoded = self.codec.encode_query(query)?;

        let server_addr = self.resolver.resolve(server, port).await?;

        debug!(
            server = %server_addr,
            protocol = self.transport.protocol_name(),
            id = encoded.id,
            qtype = %query.qtype(),
            mode = %query.mode,
            "Sending query"
        );

        let response_bytes = self
            .transport
            .exchange(server_addr, &encoded.bytes, self.timeout)
            .await?;

        let response = self.codec.decode_response(&response_bytes)?;

        if response.header.id != encoded.id {
            warn!(
                expected = encoded.id,
                received = response.header.id,
                server = %server_addr,
                "Response id does not match query id"
            );
        }

        info!(
            target_name = %query.target,
            server = %server_addr,
            answers = response.answers.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Lookup complete"
        );

        Ok(LookupOutcome {
            server: server_addr,
            query_bytes: encoded.bytes,
            response_bytes,
            response,
        })
    }
}
