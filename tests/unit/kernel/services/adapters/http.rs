use super::*;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one canned response and returns the request line it received.
async fn serve_once(status_line: &str, content_type: &str, body: &str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        let head = String::from_utf8_lossy(&head).into_owned();
        head.lines().next().unwrap_or_default().to_string()
    });
    (addr, server)
}

fn transport(endpoint: String) -> HttpTransport {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpTransport::with_client(client, endpoint)
}

#[tokio::test]
async fn test_get_sends_encoded_query_and_page() {
    let (addr, server) = serve_once("200 OK", "application/json; charset=utf-8", r#"{"results":[]}"#).await;
    let transport = transport(format!("http://{addr}/manager/search/"));
    assert_eq!(transport.endpoint(), format!("http://{addr}/manager/search/"));

    let raw = transport.get("ana b&c", 2).await.unwrap();

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "GET /manager/search/?q=ana+b%26c&page=2 HTTP/1.1");
    assert_eq!(raw.status, 200);
    assert!(raw.is_success());
    assert_eq!(raw.content_type.as_deref(), Some("application/json; charset=utf-8"));
    assert_eq!(raw.body, br#"{"results":[]}"#.to_vec());
}

#[tokio::test]
async fn test_error_status_keeps_reason_and_content_type() {
    let (addr, server) = serve_once("404 Not Found", "text/html", "<h1>missing</h1>").await;
    let transport = transport(format!("http://{addr}/search/"));

    let raw = transport.get("ana", 1).await.unwrap();
    server.await.unwrap();

    assert_eq!(raw.status, 404);
    assert_eq!(raw.reason, "Not Found");
    assert_eq!(raw.content_type.as_deref(), Some("text/html"));
    assert!(!raw.is_success());
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = transport(format!("http://{addr}/search/"));
    let err = transport.get("ana", 1).await.unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)), "{err:?}");
}

#[test]
fn test_from_settings_uses_endpoint() {
    let settings = Settings {
        endpoint: "http://search.local/api/".to_string(),
        ..Settings::default()
    };
    let transport = HttpTransport::from_settings(&settings).unwrap();
    assert_eq!(transport.endpoint(), "http://search.local/api/");
}
