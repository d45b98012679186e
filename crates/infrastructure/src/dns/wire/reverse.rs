//! Question names for address-to-name lookups.

use dnsprobe_domain::{DomainError, DomainName};

const IPV4_SUFFIX: &str = "in-addr.arpa";
const IPV6_SUFFIX: &str = "ip6.arpa";
const IPV6_GROUPS: usize = 8;

/// Builds the PTR question name for an IPv4 or IPv6 literal.
///
/// A literal containing `:` is read as IPv6, anything else as IPv4.
pub fn reverse_name(literal: &str) -> Result<DomainName, DomainError> {
    let dotted = if literal.contains(':') {
        ipv6_reverse(literal)?
    } else {
        ipv4_reverse(literal)?
    };
    DomainName::parse(&dotted)
}

/// `192.0.2.1` -> `1.2.0.192.in-addr.arpa`
pub fn ipv4_reverse(literal: &str) -> Result<String, DomainError> {
    let octets = parse_ipv4(literal)
        .ok_or_else(|| DomainError::InvalidAddressLiteral(literal.to_string()))?;

    let mut out = String::with_capacity(literal.len() + IPV4_SUFFIX.len() + 1);
    for octet in octets.iter().rev() {
        out.push_str(&octet.to_string());
        out.push('.');
    }
    out.push_str(IPV4_SUFFIX);
    Ok(out)
}

/// Exactly four dot-separated decimal parts of 1-3 digits, each at most 255.
fn parse_ipv4(literal: &str) -> Option<[u8; 4]> {
    let octets = literal
        .split('.')
        .map(|part| {
            if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u8>().ok()
        })
        .collect::<Option<Vec<u8>>>()?;
    octets.try_into().ok()
}

/// `2001:db8::1` -> `1.0.0.0. ... .8.b.d.0.1.0.0.2.ip6.arpa` (32 nibbles)
pub fn ipv6_reverse(literal: &str) -> Result<String, DomainError> {
    let groups = expand_ipv6(literal)?;

    let mut out = String::with_capacity(32 * 2 + IPV6_SUFFIX.len());
    for group in groups.iter().rev() {
        for shift in [0u16, 4, 8, 12] {
            let nibble = (group >> shift) & 0xF;
            out.push(char::from_digit(u32::from(nibble), 16).unwrap_or('0'));
            out.push('.');
        }
    }
    out.push_str(IPV6_SUFFIX);
    Ok(out)
}

/// Expands an IPv6 literal into its eight 16-bit groups.
///
/// A `::` stands for `8 - explicit groups` zero groups, and at least one
/// group must be missing for it to be legal. The last group may be written
/// as a dotted IPv4 address (`::ffff:192.0.2.1`), counting as two groups.
pub fn expand_ipv6(literal: &str) -> Result<[u16; IPV6_GROUPS], DomainError> {
    let invalid = || DomainError::InvalidAddressLiteral(literal.to_string());

    let parse_groups = |part: &str, ipv4_tail: bool| -> Result<Vec<u16>, DomainError> {
        let mut groups = Vec::new();
        if part.is_empty() {
            return Ok(groups);
        }
        let mut parts = part.split(':').peekable();
        while let Some(g) = parts.next() {
            if ipv4_tail && parts.peek().is_none() && g.contains('.') {
                let [a, b, c, d] = parse_ipv4(g).ok_or_else(invalid)?;
                groups.push(u16::from_be_bytes([a, b]));
                groups.push(u16::from_be_bytes([c, d]));
                continue;
            }
            if g.is_empty() || g.len() > 4 || !g.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            groups.push(u16::from_str_radix(g, 16).map_err(|_| invalid())?);
        }
        Ok(groups)
    };

    let groups: Vec<u16> = match literal.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return Err(invalid());
            }
            let head = parse_groups(head, false)?;
            let tail = parse_groups(tail, true)?;
            let explicit = head.len() + tail.len();
            if explicit >= IPV6_GROUPS {
                return Err(invalid());
            }
            let missing = IPV6_GROUPS - explicit;
            head.into_iter()
                .chain(std::iter::repeat(0).take(missing))
                .chain(tail)
                .collect()
        }
        None => parse_groups(literal, true)?,
    };

    groups.try_into().map_err(|_: Vec<u16>| invalid())
}
