//! Human-readable rendering of a lookup.

use dnsprobe_domain::{DnsResponse, ResourceRecord};
use dnsprobe_infrastructure::dns::wire::hexdump::format_packet;
use std::fmt::Write;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn render_response(response: &DnsResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Authoritative: {}, Recursive: {}, Truncated: {}",
        yes_no(response.is_authoritative()),
        yes_no(response.is_recursive()),
        yes_no(response.is_truncated())
    );

    let _ = writeln!(out, "Question section ({})", response.questions.len());
    for question in &response.questions {
        let _ = writeln!(out, " {}", question);
    }

    render_section(&mut out, "Answer", &response.answers);
    render_section(&mut out, "Authority", &response.authorities);
    render_section(&mut out, "Additional", &response.additionals);

    out
}

fn render_section(out: &mut String, title: &str, records: &[ResourceRecord]) {
    let _ = writeln!(out, "{} section ({})", title, records.len());
    for record in records {
        let _ = writeln!(out, " {}", record);
    }
}

pub fn render_dump(query_bytes: &[u8], response_bytes: &[u8]) -> String {
    format!(
        "Query ({} bytes)\n{}\nResponse ({} bytes)\n{}",
        query_bytes.len(),
        format_packet(query_bytes),
        response_bytes.len(),
        format_packet(response_bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsprobe_domain::{
        DomainName, MessageHeader, Question, RData, RecordClass, RecordType, ResponseCode,
    };
    use std::net::Ipv4Addr;

    fn sample() -> DnsResponse {
        let name = DomainName::parse("example.com").unwrap();
        DnsResponse {
            header: MessageHeader {
                id: 1,
                query_response: true,
                recursion_desired: true,
                recursion_available: true,
                response_code: ResponseCode::NoError,
                question_count: 1,
                answer_count: 2,
                ..MessageHeader::default()
            },
            questions: vec![Question::new(name.clone(), RecordType::A, RecordClass::IN)],
            answers: vec![
                ResourceRecord {
                    name: name.clone(),
                    rtype: 1,
                    class: 1,
                    ttl: 60,
                    rdlength: 4,
                    rdata: RData::A(Ipv4Addr::new(93, 184, 216, 34)),
                },
                ResourceRecord {
                    name,
                    rtype: 16,
                    class: 1,
                    ttl: 60,
                    rdlength: 3,
                    rdata: RData::Opaque(b"\x02hi".to_vec()),
                },
            ],
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    #[test]
    fn test_render_response_layout() {
        let rendered = render_response(&sample());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Authoritative: No, Recursive: Yes, Truncated: No");
        assert_eq!(lines[1], "Question section (1)");
        assert_eq!(lines[2], " example.com., A, IN");
        assert_eq!(lines[3], "Answer section (2)");
        assert_eq!(lines[4], " example.com., A, IN, 60, 93.184.216.34");
        assert_eq!(lines[5], " example.com., TXT, IN, 60, TXT is not supported yet.");
        assert_eq!(lines[6], "Authority section (0)");
        assert_eq!(lines[7], "Additional section (0)");
    }

    #[test]
    fn test_recursive_follows_rd_even_without_ra() {
        let mut response = sample();
        response.header.recursion_available = false;
        let rendered = render_response(&response);
        assert!(rendered.starts_with("Authoritative: No, Recursive: Yes, Truncated: No\n"));

        response.header.recursion_desired = false;
        response.header.recursion_available = true;
        let rendered = render_response(&response);
        assert!(rendered.starts_with("Authoritative: No, Recursive: No, Truncated: No\n"));
    }

    #[test]
    fn test_render_dump_labels_both_packets() {
        let dump = render_dump(&[0u8; 12], &[0u8; 20]);
        assert!(dump.starts_with("Query (12 bytes)\n0x0000:"));
        assert!(dump.contains("Response (20 bytes)\n0x0000:"));
        assert!(dump.contains("0x0010:"));
    }
}
