//! Tests for the HTTP Server
//!
//! These tests verify:
//! - `GET /status` serves the status JSON
//! - Query failures become a 500 without a body
//! - Routing of unknown paths and methods
//! - Serving on a socket and graceful shutdown

#[path = "../common/mod.rs"]
mod common;

use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use common::{refused_addr, spawn_ping_server, CAPTURED_RESPONSE};
use mcstat::http::{Server, STATUS_PATH};
use mcstat::{Config, ErrorKind, Result};

// =============================================================================
// Helper Functions
// =============================================================================

fn test_config(target_port: u16) -> Config {
    Config::builder()
        .server_host("127.0.0.1")
        .server_port(target_port)
        .listen_addr("127.0.0.1:0")
        .connect_timeout_ms(2000)
        .read_timeout_ms(2000)
        .worker_threads(2)
        .build()
}

/// Send one request through the router without a socket
async fn request(target_port: u16, method: Method, uri: &str) -> Response {
    let app = Server::new(test_config(target_port)).unwrap().router();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

struct RunningServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<()>>,
}

impl RunningServer {
    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

/// Serve on an ephemeral port querying `target_port`
async fn start_server(target_port: u16) -> RunningServer {
    let server = Server::new(test_config(target_port)).unwrap();
    let listener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, signal) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        server
            .serve(listener, async {
                let _ = signal.await;
            })
            .await
    });

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}

async fn send_raw(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

// =============================================================================
// Status Route Tests
// =============================================================================

#[tokio::test]
async fn test_status_route_serves_json() {
    let (mc_addr, mc_server) = spawn_ping_server(CAPTURED_RESPONSE.to_vec());

    let response = request(mc_addr.port(), Method::GET, STATUS_PATH).await;
    mc_server.join().unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["Online"], true);
    assert_eq!(json["Version"], "1.16.4");
    assert_eq!(json["Motd"], "The great world of Rouckhout");
    assert_eq!(json["CurrentPlayers"], "1");
    assert_eq!(json["MaxPlayers"], "20");
}

#[tokio::test]
async fn test_status_route_ignores_query_string() {
    let (mc_addr, mc_server) = spawn_ping_server(CAPTURED_RESPONSE.to_vec());

    let response = request(mc_addr.port(), Method::GET, "/status?pretty=1").await;
    mc_server.join().unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unreachable_target_is_server_error() {
    let refused = refused_addr();

    let response = request(refused.port(), Method::GET, STATUS_PATH).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn test_malformed_target_response_is_server_error() {
    let (mc_addr, mc_server) = spawn_ping_server(vec![0u8; 512]);

    let response = request(mc_addr.port(), Method::GET, STATUS_PATH).await;
    mc_server.join().unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Routing Tests
// =============================================================================

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = request(refused_addr().port(), Method::GET, "/players").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let response = request(refused_addr().port(), Method::POST, STATUS_PATH).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response.headers()[header::ALLOW].to_str().unwrap();
    assert!(allow.contains("GET"), "{}", allow);
}

// =============================================================================
// Socket Tests
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_serves_status_over_http() {
    let (mc_addr, mc_server) = spawn_ping_server(CAPTURED_RESPONSE.to_vec());
    let server = start_server(mc_addr.port()).await;

    let response = send_raw(
        server.addr,
        "GET /status HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    server.stop().await;
    mc_server.join().unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "{}", response);
    assert!(response
        .to_ascii_lowercase()
        .contains("content-type: application/json\r\n"));

    let body = response.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or("");
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["Motd"], "The great world of Rouckhout");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_garbage_request_is_bad_request() {
    let server = start_server(refused_addr().port()).await;

    let response = send_raw(server.addr, "hello\r\n\r\n").await;
    server.stop().await;

    assert!(response.starts_with("HTTP/1.1 400 "), "{}", response);
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_shutdown_stops_serving() {
    let server = start_server(refused_addr().port()).await;
    let addr = server.addr;

    // Returns once the shutdown future resolves and serve drains
    server.stop().await;

    assert!(TcpStream::connect(addr).await.is_err());
}

#[test]
fn test_invalid_config_rejected() {
    let config = Config::builder().worker_threads(0).build();
    let err = Server::new(config).err().unwrap();

    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn test_unbounded_read_rejected() {
    let config = Config::builder().read_timeout_ms(0).build();

    assert!(Server::new(config).is_err());
}

#[tokio::test]
async fn test_bind_failure_reported() {
    let config = Config::builder().listen_addr("256.0.0.1:80").build();
    let server = Server::new(config).unwrap();

    let err = server.bind().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn test_runtime_uses_configured_workers() {
    let server = Server::new(test_config(refused_addr().port())).unwrap();
    let runtime = server.runtime().unwrap();

    assert_eq!(runtime.metrics().num_workers(), 2);
}
