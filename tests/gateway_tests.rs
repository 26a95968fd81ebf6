//! Generation gateways against a local HTTP responder and the demo fixture.

use bookstream::clients::{
    FixtureGateway, GenerationApiClient, GenerationError, GenerationGateway, build_gateway,
};
use bookstream::config::GenerationConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers a single request with `status` and `body`, returning the raw
/// request head it received.
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/api/generate"), task)
}

fn client_for(endpoint: String, api_key: Option<&str>) -> GenerationApiClient {
    let config = GenerationConfig {
        endpoint,
        api_key: api_key.map(str::to_string),
        request_timeout_seconds: 5,
        use_system_proxy: false,
        fixture_path: None,
    };
    GenerationApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn api_client_posts_and_parses_catalog() {
    let body = include_str!("../demos/catalog.json").to_string();
    let (endpoint, server) = serve_once("200 OK", body).await;

    let catalog = client_for(endpoint, Some("secret")).generate().await.unwrap();
    let request = server.await.unwrap().to_ascii_lowercase();

    assert_eq!(catalog.books.len(), 5);
    assert_eq!(catalog.comments.len(), 8);
    assert!(request.starts_with("post /api/generate "));
    assert!(request.contains("authorization: bearer secret"));
}

#[tokio::test]
async fn api_client_omits_auth_without_key() {
    let body = r#"{"books": [], "authors": [], "comments": []}"#.to_string();
    let (endpoint, server) = serve_once("200 OK", body).await;

    let catalog = client_for(endpoint, None).generate().await.unwrap();
    let request = server.await.unwrap().to_ascii_lowercase();

    assert!(catalog.is_empty());
    assert!(!request.contains("authorization:"));
}

#[tokio::test]
async fn api_client_reports_error_status() {
    let (endpoint, server) =
        serve_once("503 Service Unavailable", r#"{"error":"busy"}"#.to_string()).await;

    let err = client_for(endpoint, None).generate().await.unwrap_err();
    server.await.unwrap();

    match &err {
        GenerationError::Status { status, body } => {
            assert_eq!(*status, 503);
            assert!(body.contains("busy"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(err.message().contains("503"));
}

#[tokio::test]
async fn api_client_rejects_malformed_catalog() {
    let (endpoint, server) = serve_once("200 OK", r#"{"books": "nope"}"#.to_string()).await;

    let err = client_for(endpoint, None).generate().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, GenerationError::Malformed(_)));
}

#[tokio::test]
async fn fixture_gateway_reads_demo_catalog() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/catalog.json");
    let gateway = FixtureGateway::new(path);

    let first = gateway.generate().await.unwrap();
    let second = gateway.generate().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.authors.len(), 4);
}

#[tokio::test]
async fn build_gateway_prefers_fixture() {
    let config = GenerationConfig {
        endpoint: "not a url".to_string(),
        fixture_path: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/catalog.json").into()),
        ..GenerationConfig::default()
    };

    let gateway = build_gateway(&config).unwrap();
    assert_eq!(gateway.generate().await.unwrap().books.len(), 5);

    let config = GenerationConfig {
        endpoint: "not a url".to_string(),
        ..GenerationConfig::default()
    };
    assert!(build_gateway(&config).is_err());
}
