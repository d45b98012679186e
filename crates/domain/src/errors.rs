use crate::ResponseCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    // Name and address encoding
    #[error("Label too long: {len} octets (max 63)")]
    LabelTooLong { len: usize },

    #[error("Domain name too long: more than 255 octets in wire form")]
    NameTooLong,

    #[error("Empty label in domain name: {0}")]
    EmptyLabel(String),

    #[error("Invalid address literal: {0}")]
    InvalidAddressLiteral(String),

    // Message decoding
    #[error("Truncated header: {len} bytes received, 12 required")]
    TruncatedHeader { len: usize },

    #[error("Truncated record: message ends before offset {offset}")]
    TruncatedRecord { offset: usize },

    #[error("Compression loop detected at offset {offset}")]
    CompressionLoop { offset: usize },

    #[error("Unsupported label type 0x{0:02x}")]
    UnsupportedLabelType(u8),

    #[error("Invalid {record_type} rdata length: expected {expected}, got {actual}")]
    InvalidRdataLength {
        record_type: &'static str,
        expected: usize,
        actual: usize,
    },

    // Protocol
    #[error("Server responded with {}: {}", .0.as_str(), .0.description())]
    ServerRejected(ResponseCode),

    // Transport
    #[error("Address resolution failed: {0}")]
    AddressResolutionFailed(String),

    #[error("Socket error: {0}")]
    SocketError(String),

    #[error("Send error: {0}")]
    SendError(String),

    #[error("Timeout waiting for response from {server}")]
    Timeout { server: String },

    #[error("Receive error: {0}")]
    ReceiveError(String),
}
