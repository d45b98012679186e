mod helpers;

use dnsprobe_application::use_cases::PerformLookupUseCase;
use dnsprobe_domain::{DnsQuery, DomainError, ResponseCode};
use helpers::{sample_response, MockAddressResolver, MockDnsTransport, MockMessageCodec};
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn make_use_case(
    resolver: Arc<MockAddressResolver>,
    transport: Arc<MockDnsTransport>,
    codec: Arc<MockMessageCodec>,
) -> PerformLookupUseCase {
    PerformLookupUseCase::new(resolver, transport, codec, TIMEOUT)
}

#[tokio::test]
async fn test_execute_returns_decoded_response() {
    let resolver = Arc::new(MockAddressResolver::resolving_to("192.0.2.53:53"));
    let transport = Arc::new(MockDnsTransport::replying(vec![0xAB; 40]));
    let codec = Arc::new(MockMessageCodec::new(0x1234, Ok(sample_response(0x1234))));

    let use_case = make_use_case(resolver.clone(), transport.clone(), codec);
    let query = DnsQuery::forward("example.com").with_recursion(true);

    let outcome = use_case.execute("ns.example.net", 53, &query).await.unwrap();

    assert_eq!(outcome.server, "192.0.2.53:53".parse().unwrap());
    assert_eq!(outcome.query_bytes, b"example.com".to_vec());
    assert_eq!(outcome.response_bytes.len(), 40);
    assert_eq!(outcome.response.answers.len(), 1);

    assert_eq!(resolver.calls(), vec![("ns.example.net".to_string(), 53)]);
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].2, TIMEOUT);
}

#[tokio::test]
async fn test_encoding_error_stops_before_network() {
    let resolver = Arc::new(MockAddressResolver::resolving_to("192.0.2.53:53"));
    let transport = Arc::new(MockDnsTransport::replying(vec![]));
    let codec = Arc::new(MockMessageCodec::failing_encode(
        DomainError::InvalidAddressLiteral("300.1.1.1".to_string()),
    ));

    let use_case = make_use_case(resolver.clone(), transport.clone(), codec);
    let result = use_case
        .execute("192.0.2.53", 53, &DnsQuery::reverse("300.1.1.1"))
        .await;

    assert!(matches!(result, Err(DomainError::InvalidAddressLiteral(_))));
    assert!(resolver.calls().is_empty());
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_resolution_failure_is_surfaced() {
    let resolver = Arc::new(MockAddressResolver::failing(
        DomainError::AddressResolutionFailed("no such host".to_string()),
    ));
    let transport = Arc::new(MockDnsTransport::replying(vec![]));
    let codec = Arc::new(MockMessageCodec::new(1, Ok(sample_response(1))));

    let use_case = make_use_case(resolver, transport.clone(), codec);
    let result = use_case
        .execute("nowhere.invalid", 53, &DnsQuery::forward("example.com"))
        .await;

    assert!(matches!(result, Err(DomainError::AddressResolutionFailed(_))));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_timeout_is_not_retried() {
    let resolver = Arc::new(MockAddressResolver::resolving_to("192.0.2.53:53"));
    let transport = Arc::new(MockDnsTransport::failing(DomainError::Timeout {
        server: "192.0.2.53:53".to_string(),
    }));
    let codec = Arc::new(MockMessageCodec::new(1, Ok(sample_response(1))));

    let use_case = make_use_case(resolver, transport.clone(), codec.clone());
    let result = use_case
        .execute("192.0.2.53", 53, &DnsQuery::forward("example.com"))
        .await;

    assert!(matches!(result, Err(DomainError::Timeout { .. })));
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(codec.decode_calls(), 0);
}

#[tokio::test]
async fn test_server_rejection_is_surfaced() {
    let resolver = Arc::new(MockAddressResolver::resolving_to("192.0.2.53:53"));
    let transport = Arc::new(MockDnsTransport::replying(vec![0; 12]));
    let codec = Arc::new(MockMessageCodec::new(
        7,
        Err(DomainError::ServerRejected(ResponseCode::NameError)),
    ));

    let use_case = make_use_case(resolver, transport, codec);
    let result = use_case
        .execute("192.0.2.53", 53, &DnsQuery::forward("nonexistent.example"))
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::ServerRejected(ResponseCode::NameError)
    );
}

#[tokio::test]
async fn test_id_mismatch_still_returns_response() {
    let resolver = Arc::new(MockAddressResolver::resolving_to("192.0.2.53:53"));
    let transport = Arc::new(MockDnsTransport::replying(vec![0; 12]));
    let codec = Arc::new(MockMessageCodec::new(1, Ok(sample_response(2))));

    let use_case = make_use_case(resolver, transport, codec);
    let outcome = use_case
        .execute("192.0.2.53", 53, &DnsQuery::forward("example.com"))
        .await
        .unwrap();

    assert_eq!(outcome.response.header.id, 2);
}
