mod mock_ports;

pub use mock_ports::{sample_response, MockAddressResolver, MockDnsTransport, MockMessageCodec};
