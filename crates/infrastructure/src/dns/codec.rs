use super::forwarding::{MessageBuilder, ResponseParser};
use super::wire::hexdump::format_packet;
use dnsprobe_application::ports::{EncodedQuery, MessageCodec};
use dnsprobe_domain::{DnsQuery, DnsResponse, DomainError};
use tracing::{enabled, trace, Level};

/// RFC 1035 wire codec backing the [`MessageCodec`] port.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireCodec;

impl WireCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for WireCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(query)?;
        if enabled!(Level::TRACE) {
            trace!(id = id, len = bytes.len(), "Query bytes:\n{}", format_packet(&bytes));
        }
        Ok(EncodedQuery { id, bytes })
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        if enabled!(Level::TRACE) {
            trace!(len = bytes.len(), "Response bytes:\n{}", format_packet(bytes));
        }
        ResponseParser::parse(bytes)
    }
}
