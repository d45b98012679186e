//! DNS Message Builder
//!
//! Constructs single-question query messages in wire format.

use crate::dns::wire::{header, name, reverse_name};
use dnsprobe_domain::{
    DnsQuery, DomainError, DomainName, LookupMode, MessageHeader, RecordClass,
};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random id and return both.
    ///
    /// The id is needed later to match the response against the query.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_with_id(query, id)?;
        Ok((id, bytes))
    }

    /// Build a query with a caller-chosen id.
    ///
    /// Layout: 12-byte header with QDCOUNT=1, then QNAME, QTYPE and QCLASS=IN.
    /// RD follows the query; every other flag is clear.
    pub fn build_query_with_id(query: &DnsQuery, id: u16) -> Result<Vec<u8>, DomainError> {
        let qname = Self::question_name(query)?;

        let mut buf = Vec::with_capacity(header::HEADER_LEN + qname.wire_len() + 4);
        buf.extend_from_slice(&header::encode(&MessageHeader::query(
            id,
            query.recursion_desired,
        )));
        name::encode_name(&qname, &mut buf);
        buf.extend_from_slice(&query.qtype().to_u16().to_be_bytes());
        buf.extend_from_slice(&RecordClass::IN.to_u16().to_be_bytes());

        Ok(buf)
    }

    /// Forward targets are encoded verbatim; reverse targets become the
    /// `in-addr.arpa` or `ip6.arpa` name for the literal.
    fn question_name(query: &DnsQuery) -> Result<DomainName, DomainError> {
        match query.mode {
            LookupMode::Forward => DomainName::parse(&query.target),
            LookupMode::Reverse => reverse_name(&query.target),
        }
    }
}
