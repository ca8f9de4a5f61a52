//! VerifyClient against a one-shot loopback HTTP server.

use factcheck_client::{validate_claim, VerifyClient};
use factcheck_core::config::ClientConfig;
use factcheck_core::errors::{FactcheckErrorCode, TransportError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Helper: serve exactly one canned response; the handle yields the raw request.
async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client_for(base_url: &str) -> VerifyClient {
    VerifyClient::new(&ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    })
    .unwrap()
}

#[test]
fn empty_claims_are_rejected() {
    assert!(matches!(validate_claim(""), Err(TransportError::InvalidClaim)));
    assert!(matches!(validate_claim("  \n\t"), Err(TransportError::InvalidClaim)));
    assert_eq!(validate_claim(" X ").unwrap(), " X ");
}

#[test]
fn endpoint_is_verify_path_on_origin() {
    let client = client_for("http://127.0.0.1:8000");
    assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:8000/api/verify");
}

#[test]
fn bad_base_url_is_config_error() {
    let err = VerifyClient::new(&ClientConfig {
        base_url: "not a url".to_string(),
        ..ClientConfig::default()
    })
    .unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[tokio::test]
async fn invalid_claim_never_reaches_the_network() {
    // Nothing listens on port 9; a request would fail with a network error.
    let client = client_for("http://127.0.0.1:9");
    let err = client.verify("   ").await.unwrap_err();
    assert!(matches!(err, TransportError::InvalidClaim));
}

#[tokio::test]
async fn success_posts_claim_and_decodes_result() {
    let body = serde_json::json!({
        "claim": "X",
        "score": 0.83,
        "sources": [{"domain": "health.gov.il", "chunks": ["evidence text"]}]
    })
    .to_string();
    let (base_url, server) = serve_once("200 OK", body).await;

    let result = client_for(&base_url).verify("X").await.unwrap();
    assert_eq!(result.claim, "X");
    assert_eq!(result.score, Some(0.83));
    assert_eq!(result.sources[0].domain.as_deref(), Some("health.gov.il"));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/verify HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"claim":"X"}"#));
}

#[tokio::test]
async fn error_status_becomes_single_message_with_truncated_body() {
    let detail = "d".repeat(1000);
    let (base_url, server) = serve_once("502 Bad Gateway", detail).await;

    let err = client_for(&base_url).verify("X").await.unwrap_err();
    match &err {
        TransportError::Status { status, reason, body } => {
            assert_eq!(*status, 502);
            assert_eq!(reason, "Bad Gateway");
            assert_eq!(body.len(), 300);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with("HTTP 502 Bad Gateway: ddd"));
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_success_body_is_decode_error() {
    let (base_url, server) = serve_once("200 OK", "<html>oops</html>".to_string()).await;
    let err = client_for(&base_url).verify("X").await.unwrap_err();
    assert_eq!(err.error_code(), "DECODE_FAILED");
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_shape_is_not_an_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"score": "??", "sources": 7}"#.to_string()).await;
    let result = client_for(&base_url).verify("X").await.unwrap();
    assert_eq!(result.score, None);
    assert!(result.sources.is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&base_url).verify("X").await.unwrap_err();
    assert_eq!(err.error_code(), "NETWORK_ERROR");
}
