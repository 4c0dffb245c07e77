use super::*;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
struct CapturedRequest {
    request_line: String,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

/// Serve one canned `(status, body)` response per incoming connection.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Captured, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("local addr should resolve");
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let captured_for_server = Arc::clone(&captured);

    let task = tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let Ok(request) = read_http_request(&mut stream).await else {
                return;
            };
            captured_for_server.lock().await.push(request);

            let reason = match status {
                200 => "OK",
                400 => "Bad Request",
                404 => "Not Found",
                _ => "Internal Server Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (format!("http://{addr}"), captured, task)
}

async fn read_http_request(stream: &mut TcpStream) -> Result<CapturedRequest, String> {
    let mut buffer = Vec::new();
    let mut header_end = None;
    while header_end.is_none() {
        let mut chunk = [0_u8; 1024];
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            return Err("Unexpected EOF while reading HTTP headers".to_string());
        }
        buffer.extend_from_slice(&chunk[..read]);
        header_end = buffer
            .windows(4)
            .position(|window| window == b"\r\n\r\n")
            .map(|index| index + 4);
    }

    let header_end = header_end.expect("header end should exist");
    let header_text =
        std::str::from_utf8(&buffer[..header_end]).map_err(|err| err.to_string())?;
    let mut lines = header_text.split("\r\n").filter(|line| !line.is_empty());
    let request_line = lines
        .next()
        .ok_or_else(|| "Missing HTTP request line".to_string())?
        .to_string();

    let mut content_length = 0_usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().map_err(|_| "bad length")?;
            }
        }
    }

    let mut body = buffer[header_end..].to_vec();
    while body.len() < content_length {
        let mut chunk = vec![0_u8; content_length - body.len()];
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            return Err("Unexpected EOF while reading HTTP body".to_string());
        }
        body.extend_from_slice(&chunk[..read]);
    }
    body.truncate(content_length);

    Ok(CapturedRequest { request_line, body })
}

#[tokio::test]
async fn generate_persona_maps_wire_fields() {
    let (base_url, captured, server) = serve(vec![(
        200,
        r#"{"id": 1, "description": "wizard", "is_custom": false}"#,
    )])
    .await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let persona = backend.generate_persona().await.unwrap();

    assert_eq!(persona, Persona::new(1, "wizard", false));
    server.await.unwrap();
    let requests = captured.lock().await;
    assert!(requests[0].request_line.starts_with("GET /generate_persona "));
}

#[tokio::test]
async fn add_custom_persona_posts_description() {
    let (base_url, captured, server) = serve(vec![(
        200,
        r#"{"id": 12, "description": "a sarcastic robot", "is_custom": true}"#,
    )])
    .await;
    let backend = HttpBackend::new(&format!("{base_url}/")).unwrap();

    let persona = backend.add_custom_persona("a sarcastic robot").await.unwrap();

    assert_eq!(persona.id, 12);
    assert!(persona.is_custom);
    server.await.unwrap();
    let requests = captured.lock().await;
    assert!(requests[0].request_line.starts_with("POST /add_persona "));
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"description": "a sarcastic robot"})
    );
}

#[tokio::test]
async fn send_message_sends_empty_history_and_no_session_id() {
    let (base_url, captured, server) = serve(vec![(
        200,
        r#"{"response": "hi there", "persona": "wizard", "mode": "uncensored", "filtered": true}"#,
    )])
    .await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let reply = backend
        .send_message(ChatTurn {
            message: "hello".to_string(),
            persona: "wizard".to_string(),
            mode: ChatMode::Uncensored,
            session_id: "1700000000000".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(reply.message, "hi there");
    assert_eq!(reply.filtered, Some(true));
    server.await.unwrap();
    let requests = captured.lock().await;
    assert!(requests[0].request_line.starts_with("POST /chat "));
    assert_eq!(
        requests[0].json(),
        serde_json::json!({
            "message": "hello",
            "persona": "wizard",
            "mode": "uncensored",
            "conversation_history": []
        })
    );
}

#[tokio::test]
async fn send_message_without_filtered_field_leaves_it_absent() {
    let (base_url, _captured, server) = serve(vec![(200, r#"{"response": "ok"}"#)]).await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let reply = backend
        .send_message(ChatTurn {
            message: "x".to_string(),
            persona: "y".to_string(),
            mode: ChatMode::Regular,
            session_id: "1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(reply.filtered, None);
    server.await.unwrap();
}

#[tokio::test]
async fn get_personas_decodes_list() {
    let (base_url, _captured, server) = serve(vec![(
        200,
        r#"[{"id": 1, "description": "a", "is_custom": false},
            {"id": 2, "description": "b", "is_custom": true}]"#,
    )])
    .await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let personas = backend.get_personas().await.unwrap();

    assert_eq!(
        personas,
        vec![Persona::new(1, "a", false), Persona::new(2, "b", true)]
    );
    server.await.unwrap();
}

#[tokio::test]
async fn shape_mismatch_is_a_decode_error() {
    let (base_url, _captured, server) =
        serve(vec![(200, r#"[{"id": "one", "description": "a"}]"#)]).await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let err = backend.get_personas().await.unwrap_err();

    assert!(matches!(err, BackendError::Decode { .. }));
    assert!(!err.is_transport());
    assert_eq!(err.endpoint(), "/personas");
    server.await.unwrap();
}

#[tokio::test]
async fn non_success_status_carries_backend_detail() {
    let (base_url, _captured, server) = serve(vec![(
        400,
        r#"{"detail": "Invalid persona description. Must be at least 10 characters and appropriate content."}"#,
    )])
    .await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let err = backend.add_custom_persona("short").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(err.to_string().contains("at least 10 characters"));
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_error_body_still_reports_status() {
    let (base_url, _captured, server) = serve(vec![(500, "upstream exploded")]).await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let err = backend.generate_persona().await.unwrap_err();

    match err {
        BackendError::Status { status, detail, .. } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(detail.is_none());
        }
        other => panic!("expected status error, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn delete_persona_targets_id_path() {
    let (base_url, captured, server) = serve(vec![(
        200,
        r#"{"message": "Persona deleted successfully"}"#,
    )])
    .await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let message = backend.delete_persona(9).await.unwrap();

    assert_eq!(message, "Persona deleted successfully");
    server.await.unwrap();
    let requests = captured.lock().await;
    assert!(requests[0].request_line.starts_with("DELETE /personas/9 "));
}

#[tokio::test]
async fn health_maps_provider_flag() {
    let (base_url, _captured, server) = serve(vec![(
        200,
        r#"{"status": "healthy", "groq_configured": false}"#,
    )])
    .await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let health = backend.health().await.unwrap();

    assert_eq!(health.status, "healthy");
    assert!(!health.chat_configured);
    server.await.unwrap();
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let backend = HttpBackend::new(&format!("http://{addr}")).unwrap();

    let err = backend.get_personas().await.unwrap_err();

    assert!(matches!(err, BackendError::Transport { .. }));
    assert!(err.is_transport());
    assert!(!err.is_timeout());
}
