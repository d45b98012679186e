pub mod codec;
pub mod forwarding;
pub mod transport;
pub mod wire;

pub use codec::WireCodec;
pub use forwarding::{MessageBuilder, ResponseParser};
pub use transport::{SystemAddressResolver, UdpTransport};
