use super::{RecordClass, RecordType};
use crate::DomainName;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: DomainName,
    pub rname: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl fmt::Display for SoaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname.fqdn(),
            self.rname.fqdn(),
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

/// Type-specific payload of a resource record.
///
/// Only A, AAAA, CNAME, PTR and SOA are decoded; every other type keeps its
/// raw bytes so the record can still be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(DomainName),
    Ptr(DomainName),
    Soa(SoaData),
    Opaque(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn type_name(&self) -> &'static str {
        RecordType::name_of(self.rtype)
    }

    pub fn class_name(&self) -> &'static str {
        RecordClass::name_of(self.class)
    }

    /// Presentation form of the rdata.
    pub fn rdata_text(&self) -> String {
        match &self.rdata {
            RData::A(addr) => addr.to_string(),
            RData::Aaaa(addr) => addr.to_string(),
            RData::Cname(name) | RData::Ptr(name) => name.fqdn(),
            RData::Soa(soa) => soa.to_string(),
            RData::Opaque(_) => match self.record_type() {
                Some(known) => format!("{} is not supported yet.", known),
                None => format!("type {} is not supported", self.rtype),
            },
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.name.fqdn(),
            self.type_name(),
            self.class_name(),
            self.ttl,
            self.rdata_text()
        )
    }
}
