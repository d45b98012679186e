//! Domain name wire form: length-prefixed labels ending in a zero octet,
//! with RFC 1035 §4.1.4 compression pointers on the decoding side.

use dnsprobe_domain::{DomainError, DomainName, MAX_NAME_LEN};

/// Pointer hops allowed while decoding a single name.
pub const MAX_POINTER_HOPS: usize = 128;

const POINTER_TAG: u8 = 0xC0;
const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_HIGH_MASK: u8 = 0x3F;

/// Appends the uncompressed wire form of `name` to `buf`.
///
/// Length limits were enforced when the `DomainName` was built, so this cannot fail.
pub fn encode_name(name: &DomainName, buf: &mut Vec<u8>) {
    buf.reserve(name.wire_len());
    for label in name.labels() {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label);
    }
    buf.push(0);
}

/// Parses a dotted name and appends its wire form.
pub fn encode_dotted(name: &str, buf: &mut Vec<u8>) -> Result<(), DomainError> {
    let name = DomainName::parse(name)?;
    encode_name(&name, buf);
    Ok(())
}

/// Decodes the name starting at `start` in `message`.
///
/// Returns the name and the number of bytes it occupies at `start`: up to and
/// including the first pointer or the terminating zero, whichever ends the
/// literal run. Pointers must go strictly backwards, the number of hops is
/// capped at [`MAX_POINTER_HOPS`] and the expanded name may not exceed 255
/// octets, so hostile input can neither loop nor grow without bound.
pub fn decode_name(message: &[u8], start: usize) -> Result<(DomainName, usize), DomainError> {
    let mut labels: Vec<Vec<u8>> = Vec::new();
    let mut pos = start;
    let mut wire_len = 0usize;
    let mut hops = 0usize;
    let mut consumed: Option<usize> = None;

    loop {
        let len = *message
            .get(pos)
            .ok_or(DomainError::TruncatedRecord { offset: pos })?;

        match len & LABEL_TYPE_MASK {
            POINTER_TAG => {
                let low = *message
                    .get(pos + 1)
                    .ok_or(DomainError::TruncatedRecord { offset: pos + 1 })?;
                let target = (usize::from(len & POINTER_HIGH_MASK) << 8) | usize::from(low);

                if target >= pos {
                    return Err(DomainError::CompressionLoop { offset: pos });
                }
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DomainError::CompressionLoop { offset: pos });
                }
                if consumed.is_none() {
                    consumed = Some(pos + 2 - start);
                }
                pos = target;
            }
            0x00 if len == 0 => {
                wire_len += 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(DomainError::NameTooLong);
                }
                // After a pointer `pos` sits in earlier data, so only a
                // literal run measures from `pos`.
                let consumed = match consumed {
                    Some(consumed) => consumed,
                    None => pos + 1 - start,
                };
                return Ok((DomainName::from_labels(labels)?, consumed));
            }
            0x00 => {
                let len = usize::from(len);
                // Room must remain for the terminator.
                wire_len += 1 + len;
                if wire_len + 1 > MAX_NAME_LEN {
                    return Err(DomainError::NameTooLong);
                }
                let label = message
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(DomainError::TruncatedRecord {
                        offset: pos + 1 + len,
                    })?;
                labels.push(label.to_vec());
                pos += 1 + len;
            }
            _ => return Err(DomainError::UnsupportedLabelType(len)),
        }
    }
}
