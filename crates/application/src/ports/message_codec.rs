use dnsprobe_domain::{DnsQuery, DnsResponse, DomainError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQuery {
    pub id: u16,
    pub bytes: Vec<u8>,
}

pub trait MessageCodec: Send + Sync {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError>;

    /// Decodes a response, failing on a non-zero response code before any
    /// record is decoded.
    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DomainError>;
}
