pub mod resolver;
pub mod udp;

pub use resolver::SystemAddressResolver;
pub use udp::{UdpTransport, DEFAULT_MAX_RESPONSE_SIZE};
