//! Fixed 12-byte message header (RFC 1035 §4.1.1, AD/CD from RFC 4035).
//!
//! Flag word, most significant bit first:
//!
//! ```text
//!  15 | 14..11 | 10 |  9 |  8 |  7 |  6 |  5 |  4 | 3..0
//!  QR | OPCODE | AA | TC | RD | RA |  Z | AD | CD | RCODE
//! ```

use dnsprobe_domain::{DomainError, MessageHeader, Opcode, ResponseCode};

pub const HEADER_LEN: usize = 12;

const QR: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const AA: u16 = 1 << 10;
const TC: u16 = 1 << 9;
const RD: u16 = 1 << 8;
const RA: u16 = 1 << 7;
const Z: u16 = 1 << 6;
const AD: u16 = 1 << 5;
const CD: u16 = 1 << 4;
const RCODE_MASK: u16 = 0x000F;

fn flag(set: bool, bit: u16) -> u16 {
    if set {
        bit
    } else {
        0
    }
}

pub fn encode(header: &MessageHeader) -> [u8; HEADER_LEN] {
    let flags = flag(header.query_response, QR)
        | (u16::from(header.opcode.to_u8()) << OPCODE_SHIFT)
        | flag(header.authoritative, AA)
        | flag(header.truncated, TC)
        | flag(header.recursion_desired, RD)
        | flag(header.recursion_available, RA)
        | flag(header.z, Z)
        | flag(header.authenticated_data, AD)
        | flag(header.checking_disabled, CD)
        | u16::from(header.response_code.to_u8());

    let mut buf = [0u8; HEADER_LEN];
    buf[0..2].copy_from_slice(&header.id.to_be_bytes());
    buf[2..4].copy_from_slice(&flags.to_be_bytes());
    buf[4..6].copy_from_slice(&header.question_count.to_be_bytes());
    buf[6..8].copy_from_slice(&header.answer_count.to_be_bytes());
    buf[8..10].copy_from_slice(&header.authority_count.to_be_bytes());
    buf[10..12].copy_from_slice(&header.additional_count.to_be_bytes());
    buf
}

/// Decodes the header without judging it; the response code is checked by
/// the caller.
pub fn decode(buf: &[u8]) -> Result<MessageHeader, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::TruncatedHeader { len: buf.len() });
    }

    let word = |i: usize| u16::from_be_bytes([buf[i], buf[i + 1]]);
    let flags = word(2);

    Ok(MessageHeader {
        id: word(0),
        query_response: flags & QR != 0,
        opcode: Opcode::from_u8(((flags >> OPCODE_SHIFT) & 0x0F) as u8),
        authoritative: flags & AA != 0,
        truncated: flags & TC != 0,
        recursion_desired: flags & RD != 0,
        recursion_available: flags & RA != 0,
        z: flags & Z != 0,
        authenticated_data: flags & AD != 0,
        checking_disabled: flags & CD != 0,
        response_code: ResponseCode::from_u8((flags & RCODE_MASK) as u8),
        question_count: word(4),
        answer_count: word(6),
        authority_count: word(8),
        additional_count: word(10),
    })
}
