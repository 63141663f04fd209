//! Workspace fetch tests against a one-shot local HTTP responder.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use cloner_core::{ProjectName, WorkspaceId};
use cloner_fetch::{ClientConfig, FetchError, WorkspaceClient};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Accept one connection, answer it with `status` and `body`, and hand back
/// the request head that was received.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            let read = reader.read_line(&mut line).expect("read request");
            if read == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        head
    });
    (format!("http://{addr}/api"), handle)
}

fn client(base: &str, token: Option<&str>) -> WorkspaceClient {
    WorkspaceClient::new(ClientConfig::new(base, token).expect("config"))
}

const APP_WORKSPACE: &str = r#"{"id":"abc123","devfile":{"projects":[{"name":"app","source":{"type":"git","location":"https://example.com/app.git"}}]}}"#;

// ---------------------------------------------------------------------------
// 1. Success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetches_workspace_by_id() {
    let (base, server) = serve_once("200 OK", APP_WORKSPACE);

    let workspace = client(&base, None)
        .get_by_id(&WorkspaceId::from("abc123"))
        .await
        .expect("fetch");

    let head = server.join().expect("server thread");
    assert!(
        head.starts_with("GET /api/workspace/abc123 HTTP/1.1"),
        "unexpected request line: {head}"
    );
    assert!(
        !head.to_ascii_lowercase().contains("authorization:"),
        "no token configured, but header sent: {head}"
    );

    let devfile = workspace.devfile.expect("devfile");
    assert_eq!(devfile.projects()[0].name, ProjectName::from("app"));
}

#[tokio::test]
async fn sends_bearer_token_when_configured() {
    let (base, server) = serve_once("200 OK", APP_WORKSPACE);

    client(&base, Some("machine-token"))
        .get_by_id(&WorkspaceId::from("abc123"))
        .await
        .expect("fetch");

    let head = server.join().expect("server thread");
    assert!(
        head.lines()
            .any(|l| l.eq_ignore_ascii_case("authorization: Bearer machine-token")),
        "missing bearer header: {head}"
    );
}

// ---------------------------------------------------------------------------
// 2. Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let (base, server) = serve_once("404 Not Found", r#"{"message":"Workspace not found"}"#);

    let err = client(&base, None)
        .get_by_id(&WorkspaceId::from("missing"))
        .await
        .unwrap_err();
    server.join().expect("server thread");

    match &err {
        FetchError::Status { status, body, .. } => {
            assert_eq!(*status, 404);
            assert!(body.contains("Workspace not found"), "body: {body}");
        }
        other => panic!("expected status error, got: {other}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_reported() {
    let (base, server) = serve_once("200 OK", "<html>gateway</html>");

    let err = client(&base, None)
        .get_by_id(&WorkspaceId::from("abc123"))
        .await
        .unwrap_err();
    server.join().expect("server thread");

    assert!(matches!(err, FetchError::Decode { .. }), "got: {err}");
    assert!(err.to_string().contains("/api/workspace/abc123"));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client(&format!("http://{addr}/api"), None)
        .get_by_id(&WorkspaceId::from("abc123"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }), "got: {err}");
}
