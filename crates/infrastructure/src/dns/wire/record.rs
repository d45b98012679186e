//! Question and resource record sections.

use super::name::decode_name;
use super::reader::WireReader;
use dnsprobe_domain::{
    DomainError, DomainName, Question, RData, RecordType, ResourceRecord, SoaData,
};
use std::net::{Ipv4Addr, Ipv6Addr};

/// TYPE, CLASS, TTL and RDLENGTH following the owner name.
pub const RR_FIXED_LEN: usize = 10;

const SOA_COUNTERS_LEN: usize = 20;

pub fn read_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
    let qname = reader.read_name()?;
    let qtype = reader.read_u16()?;
    let qclass = reader.read_u16()?;
    Ok(Question {
        qname,
        qtype,
        qclass,
    })
}

pub fn read_questions(
    reader: &mut WireReader<'_>,
    count: u16,
) -> Result<Vec<Question>, DomainError> {
    (0..count).map(|_| read_question(reader)).collect()
}

/// Decodes one record and leaves the cursor at `rdata start + rdlength`,
/// whether or not the rdata itself was decoded.
pub fn read_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, DomainError> {
    let name = reader.read_name()?;

    reader.require(RR_FIXED_LEN)?;
    let rtype = reader.read_u16()?;
    let class = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()?;

    reader.require(usize::from(rdlength))?;
    let rdata_start = reader.position();
    let rdata = decode_rdata(reader.buffer(), rdata_start, usize::from(rdlength), rtype)?;
    reader.skip(usize::from(rdlength))?;

    Ok(ResourceRecord {
        name,
        rtype,
        class,
        ttl,
        rdlength,
        rdata,
    })
}

/// Walks exactly `count` records; the header count is trusted, not a sentinel.
pub fn read_records(
    reader: &mut WireReader<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, DomainError> {
    // A record needs at least a one-byte name plus the fixed fields.
    let plausible = reader.remaining() / (RR_FIXED_LEN + 1);
    let mut records = Vec::with_capacity(usize::from(count).min(plausible));
    for _ in 0..count {
        records.push(read_record(reader)?);
    }
    Ok(records)
}

fn decode_rdata(
    message: &[u8],
    start: usize,
    len: usize,
    rtype: u16,
) -> Result<RData, DomainError> {
    let end = start + len;
    let rdata = &message[start..end];

    match RecordType::from_u16(rtype) {
        Some(RecordType::A) => {
            let octets: [u8; 4] = rdata.try_into().map_err(|_| invalid_len("A", 4, len))?;
            Ok(RData::A(Ipv4Addr::from(octets)))
        }
        Some(RecordType::AAAA) => {
            let octets: [u8; 16] = rdata
                .try_into()
                .map_err(|_| invalid_len("AAAA", 16, len))?;
            Ok(RData::Aaaa(Ipv6Addr::from(octets)))
        }
        Some(RecordType::CNAME) => Ok(RData::Cname(name_within(message, start, end)?.0)),
        Some(RecordType::PTR) => Ok(RData::Ptr(name_within(message, start, end)?.0)),
        Some(RecordType::SOA) => decode_soa(message, start, end),
        _ => Ok(RData::Opaque(rdata.to_vec())),
    }
}

/// A name embedded in rdata; its literal bytes may not spill past the rdata.
fn name_within(
    message: &[u8],
    pos: usize,
    end: usize,
) -> Result<(DomainName, usize), DomainError> {
    let (name, consumed) = decode_name(message, pos)?;
    if pos + consumed > end {
        return Err(DomainError::TruncatedRecord { offset: end });
    }
    Ok((name, pos + consumed))
}

fn decode_soa(message: &[u8], start: usize, end: usize) -> Result<RData, DomainError> {
    let (mname, pos) = name_within(message, start, end)?;
    let (rname, pos) = name_within(message, pos, end)?;

    let mut reader = WireReader::at(&message[..end], pos);
    reader.require(SOA_COUNTERS_LEN)?;

    Ok(RData::Soa(SoaData {
        mname,
        rname,
        serial: reader.read_u32()?,
        refresh: reader.read_u32()?,
        retry: reader.read_u32()?,
        expire: reader.read_u32()?,
        minimum: reader.read_u32()?,
    }))
}

fn invalid_len(record_type: &'static str, expected: usize, actual: usize) -> DomainError {
    DomainError::InvalidRdataLength {
        record_type,
        expected,
        actual,
    }
}
