use super::RecordType;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LookupMode {
    /// Name to address (A or AAAA).
    #[default]
    Forward,
    /// Address to name (PTR under in-addr.arpa / ip6.arpa).
    Reverse,
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMode::Forward => f.write_str("forward"),
            LookupMode::Reverse => f.write_str("reverse"),
        }
    }
}

/// What the caller asked for, before any wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    /// A domain name in forward mode, an address literal in reverse mode.
    pub target: String,
    pub mode: LookupMode,
    pub ipv6: bool,
    pub recursion_desired: bool,
}

impl DnsQuery {
    pub fn forward(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            mode: LookupMode::Forward,
            ipv6: false,
            recursion_desired: false,
        }
    }

    pub fn reverse(address: impl Into<String>) -> Self {
        Self {
            target: address.into(),
            mode: LookupMode::Reverse,
            ipv6: false,
            recursion_desired: false,
        }
    }

    pub fn with_ipv6(mut self, ipv6: bool) -> Self {
        self.ipv6 = ipv6;
        self
    }

    pub fn with_recursion(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn qtype(&self) -> RecordType {
        match self.mode {
            LookupMode::Reverse => RecordType::PTR,
            LookupMode::Forward if self.ipv6 => RecordType::AAAA,
            LookupMode::Forward => RecordType::A,
        }
    }
}
