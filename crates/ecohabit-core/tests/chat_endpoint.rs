//! Chat session behaviour against a simulated inference endpoint.
//!
//! Uses a mockito server for ordinary responses and a bare TCP listener for
//! timeouts and slow replies.

use std::time::Duration;

use ecohabit_core::chat::{Author, ChatSession, InferenceClient, FALLBACK_REPLY};
use ecohabit_core::InferenceError;
use mockito::Matcher;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const MODEL: &str = "test-org/test-model";
const PATH: &str = "/models/test-org/test-model";

fn session_for(endpoint: &str, timeout: Duration) -> ChatSession {
    let client = InferenceClient::new(endpoint, MODEL, "secret-token", timeout).unwrap();
    ChatSession::new(client)
}

fn contents(session: &ChatSession) -> Vec<(Author, String)> {
    session
        .log()
        .messages()
        .iter()
        .map(|m| (m.author(), m.content().to_string()))
        .collect()
}

/// Accepts one connection, waits `delay`, then answers 200 with `body`.
async fn slow_server(delay: Duration, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }
        tokio::time::sleep(delay).await;
        let response = format!(
            concat!(
                "HTTP/1.1 200 OK\r\n",
                "content-type: application/json\r\n",
                "content-length: {}\r\n",
                "connection: close\r\n\r\n{}",
            ),
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    request.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn successful_reply_is_appended_after_user_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer secret-token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "inputs": "hi" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"generated_text": "hello"}]"#)
        .create_async()
        .await;

    let session = session_for(&server.url(), Duration::from_secs(30));
    session.send_user_message("hi").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        contents(&session),
        vec![
            (Author::User, "hi".to_string()),
            (Author::Assistant, "hello".to_string()),
        ]
    );
    assert!(!session.is_loading());
}

#[tokio::test]
async fn only_first_completion_is_used() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"[{"generated_text": "first"}, {"generated_text": "second"}]"#)
        .create_async()
        .await;

    let session = session_for(&server.url(), Duration::from_secs(30));
    session.send_user_message("hi").await.unwrap();

    assert_eq!(session.last_message().unwrap().content(), "first");
}

#[tokio::test]
async fn server_error_yields_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let session = session_for(&server.url(), Duration::from_secs(30));
    session.send_user_message("hi").await.unwrap();

    let last = session.last_message().unwrap();
    assert_eq!(last.author(), Author::Assistant);
    assert_eq!(last.content(), FALLBACK_REPLY);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn empty_generated_text_yields_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"[{"generated_text": ""}]"#)
        .create_async()
        .await;

    let session = session_for(&server.url(), Duration::from_secs(30));
    session.send_user_message("hi").await.unwrap();

    assert_eq!(session.last_message().unwrap().content(), FALLBACK_REPLY);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn missing_text_and_empty_array_are_failures() {
    for body in [r#"[{"score": 0.3}]"#, "[]"] {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let client =
            InferenceClient::new(server.url(), MODEL, "t", Duration::from_secs(30)).unwrap();
        assert!(
            matches!(client.generate("hi").await, Err(InferenceError::EmptyCompletion)),
            "body {body} should be an empty completion"
        );
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"error": "Model is loading"}"#)
        .create_async()
        .await;

    let client = InferenceClient::new(server.url(), MODEL, "t", Duration::from_secs(30)).unwrap();
    assert!(matches!(
        client.generate("hi").await,
        Err(InferenceError::Decode(_))
    ));

    let session = ChatSession::new(client);
    session.send_user_message("hi").await.unwrap();
    assert_eq!(session.last_message().unwrap().content(), FALLBACK_REPLY);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(503)
        .create_async()
        .await;

    let client = InferenceClient::new(server.url(), MODEL, "t", Duration::from_secs(30)).unwrap();
    match client.generate("hi").await {
        Err(InferenceError::Status { status }) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn timeout_yields_fallback() {
    // Bound but never accepted: the connection sits in the backlog unanswered.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());

    let client = InferenceClient::new(&endpoint, MODEL, "t", Duration::from_millis(300)).unwrap();
    assert!(matches!(
        client.generate("hi").await,
        Err(InferenceError::Timeout { .. })
    ));

    let session = session_for(&endpoint, Duration::from_millis(300));
    session.send_user_message("hi").await.unwrap();

    assert_eq!(
        contents(&session),
        vec![
            (Author::User, "hi".to_string()),
            (Author::Assistant, FALLBACK_REPLY.to_string()),
        ]
    );
    assert!(!session.is_loading());
    drop(listener);
}

#[tokio::test]
async fn spawned_send_logs_user_message_immediately() {
    let endpoint = slow_server(Duration::from_millis(200), r#"[{"generated_text": "done"}]"#).await;
    let session = session_for(&endpoint, Duration::from_secs(5));

    let handle = session.spawn_user_message("plant a tree?").unwrap();

    assert_eq!(
        contents(&session),
        vec![(Author::User, "plant a tree?".to_string())]
    );
    assert!(session.is_loading());
    assert!(matches!(
        session.spawn_user_message("again"),
        Err(ecohabit_core::ChatError::RequestInFlight)
    ));

    handle.await.unwrap();
    assert_eq!(session.last_message().unwrap().content(), "done");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn late_reply_after_session_dropped_is_discarded() {
    let endpoint = slow_server(Duration::from_millis(200), r#"[{"generated_text": "late"}]"#).await;
    let session = session_for(&endpoint, Duration::from_secs(5));

    let handle = session.spawn_user_message("hi").unwrap();
    drop(session);

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("spawned reply task must finish")
        .expect("late reply must not panic");
}
