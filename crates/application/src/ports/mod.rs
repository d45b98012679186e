mod address_resolver;
mod dns_transport;
mod message_codec;

pub use address_resolver::ServerAddressResolver;
pub use dns_transport::DnsTransport;
pub use message_codec::{EncodedQuery, MessageCodec};

// Re-export for convenience
pub use dnsprobe_domain::{DnsQuery, DnsResponse};
