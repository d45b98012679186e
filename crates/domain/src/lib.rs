//! dnsprobe domain layer: message model, error taxonomy and configuration.
pub mod config;
pub mod dns_header;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod response_code;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, UpstreamConfig};
pub use dns_header::{MessageHeader, Opcode};
pub use dns_message::{DnsResponse, Question};
pub use dns_query::{DnsQuery, LookupMode};
pub use dns_record::{RData, RecordClass, RecordType, ResourceRecord, SoaData};
pub use domain_name::{DomainName, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use errors::DomainError;
pub use response_code::ResponseCode;
