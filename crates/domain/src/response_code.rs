use crate::DomainError;
use std::fmt;

/// 4-bit RCODE carried in the low nibble of the header flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unrecognized(u8),
}

impl ResponseCode {
    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unrecognized(other),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unrecognized(code) => code & 0x0F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unrecognized(_) => "UNKNOWN",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "no error condition",
            ResponseCode::FormatError => "the name server was unable to interpret the query",
            ResponseCode::ServerFailure => "the name server was unable to process this query",
            ResponseCode::NameError => "the domain name referenced in the query does not exist",
            ResponseCode::NotImplemented => "the name server does not support this kind of query",
            ResponseCode::Refused => "the name server refused to perform the operation",
            ResponseCode::Unrecognized(_) => "unrecognized response code",
        }
    }

    /// Gate applied before any record of a response is decoded.
    pub fn check(self) -> Result<(), DomainError> {
        match self {
            ResponseCode::NoError => Ok(()),
            code => Err(DomainError::ServerRejected(code)),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Unrecognized(code) => write!(f, "RCODE{}", code),
            other => f.write_str(other.as_str()),
        }
    }
}
