use crate::dns::wire::{header, read_questions, read_records, WireReader, HEADER_LEN};
use dnsprobe_domain::{DnsResponse, DomainError};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a complete response message.
    ///
    /// A non-zero RCODE fails with `ServerRejected` before any section is
    /// read. Sections are then walked in order, trusting exactly the counts
    /// the header announces.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let header = header::decode(response_bytes)?;
        header.response_code.check()?;

        let mut reader = WireReader::at(response_bytes, HEADER_LEN);
        let questions = read_questions(&mut reader, header.question_count)?;
        let answers = read_records(&mut reader, header.answer_count)?;
        let authorities = read_records(&mut reader, header.authority_count)?;
        let additionals = read_records(&mut reader, header.additional_count)?;

        debug!(
            id = header.id,
            rcode = %header.response_code,
            truncated = header.truncated,
            questions = questions.len(),
            answers = answers.len(),
            authority = authorities.len(),
            additional = additionals.len(),
            trailing_bytes = reader.remaining(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}
