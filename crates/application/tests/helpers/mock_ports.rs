#![allow(dead_code)]

use async_trait::async_trait;
use dnsprobe_application::ports::{
    DnsTransport, EncodedQuery, MessageCodec, ServerAddressResolver,
};
use dnsprobe_domain::{
    DnsQuery, DnsResponse, DomainError, DomainName, MessageHeader, RData, ResourceRecord,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

pub fn sample_response(id: u16) -> DnsResponse {
    let mut header = MessageHeader::query(id, true);
    header.query_response = true;
    header.recursion_available = true;
    header.answer_count = 1;

    DnsResponse {
        header,
        questions: vec![],
        answers: vec![ResourceRecord {
            name: DomainName::parse("example.com").unwrap(),
            rtype: 1,
            class: 1,
            ttl: 300,
            rdlength: 4,
            rdata: RData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }],
        authorities: vec![],
        additionals: vec![],
    }
}

pub struct MockAddressResolver {
    result: Result<SocketAddr, DomainError>,
    calls: Mutex<Vec<(String, u16)>>,
}

impl MockAddressResolver {
    pub fn resolving_to(addr: &str) -> Self {
        Self {
            result: Ok(addr.parse().unwrap()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, u16)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServerAddressResolver for MockAddressResolver {
    async fn resolve(&self, server: &str, port: u16) -> Result<SocketAddr, DomainError> {
        self.calls.lock().unwrap().push((server.to_string(), port));
        self.result.clone()
    }
}

pub struct MockDnsTransport {
    reply: Result<Vec<u8>, DomainError>,
    sent: Mutex<Vec<(SocketAddr, Vec<u8>, Duration)>>,
}

impl MockDnsTransport {
    pub fn replying(bytes: Vec<u8>) -> Self {
        Self {
            reply: Ok(bytes),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            reply: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(SocketAddr, Vec<u8>, Duration)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockDnsTransport {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        self.sent
            .lock()
            .unwrap()
            .push((server, message_bytes.to_vec(), timeout));
        self.reply.clone()
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

pub struct MockMessageCodec {
    id: u16,
    encode_error: Option<DomainError>,
    decoded: Result<DnsResponse, DomainError>,
    decode_calls: Mutex<usize>,
}

impl MockMessageCodec {
    pub fn new(id: u16, decoded: Result<DnsResponse, DomainError>) -> Self {
        Self {
            id,
            encode_error: None,
            decoded,
            decode_calls: Mutex::new(0),
        }
    }

    pub fn failing_encode(error: DomainError) -> Self {
        Self {
            id: 0,
            encode_error: Some(error),
            decoded: Err(DomainError::TruncatedHeader { len: 0 }),
            decode_calls: Mutex::new(0),
        }
    }

    pub fn decode_calls(&self) -> usize {
        *self.decode_calls.lock().unwrap()
    }
}

impl MessageCodec for MockMessageCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        if let Some(err) = &self.encode_error {
            return Err(err.clone());
        }
        Ok(EncodedQuery {
            id: self.id,
            bytes: query.target.as_bytes().to_vec(),
        })
    }

    fn decode_response(&self, _bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        *self.decode_calls.lock().unwrap() += 1;
        self.decoded.clone()
    }
}
