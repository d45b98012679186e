use crate::{DomainName, MessageHeader, RecordClass, RecordType, ResourceRecord};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(qname: DomainName, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            qname,
            qtype: qtype.to_u16(),
            qclass: qclass.to_u16(),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.qname.fqdn(),
            RecordType::name_of(self.qtype),
            RecordClass::name_of(self.qclass)
        )
    }
}

/// A fully decoded response. Owns all of its data; nothing borrows from the
/// receive buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub header: MessageHeader,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DnsResponse {
    pub fn is_authoritative(&self) -> bool {
        self.header.authoritative
    }

    /// The RD bit as echoed in the response.
    pub fn is_recursive(&self) -> bool {
        self.header.recursion_desired
    }

    pub fn is_truncated(&self) -> bool {
        self.header.truncated
    }

    pub fn record_count(&self) -> usize {
        self.answers.len() + self.authorities.len() + self.additionals.len()
    }
}
