use super::*;
use crate::core::persona::Persona;
use crate::core::session::ChatMode;
use crate::utils::test_utils::{create_stub_context, create_test_context, StubBackend};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

async fn run(ctx: &mut crate::core::app::AppContext, line: &str) -> (LoopAction, String) {
    let mut out = Vec::new();
    let action = handle_line(ctx, line, &mut out).await.unwrap();
    (action, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn message_without_persona_prints_hint() {
    let (mut ctx, backend) = create_stub_context();

    let (action, out) = run(&mut ctx, "hello").await;

    assert_eq!(action, LoopAction::Continue);
    assert!(out.contains("/persona"));
    assert!(backend.turns.lock().unwrap().is_empty());
}

#[tokio::test]
async fn generate_then_chat_round_trip() {
    let (mut ctx, backend) = create_stub_context();

    let (_, out) = run(&mut ctx, "/persona").await;
    assert!(out.contains("Now chatting with"));
    assert!(out.contains("a generated stranger"));

    let (_, out) = run(&mut ctx, "hello").await;
    assert!(out.contains("echo: hello"));
    assert_eq!(ctx.chat.messages().len(), 2);

    let turns = backend.turns.lock().unwrap();
    assert_eq!(turns[0].persona, "a generated stranger");
    assert_eq!(turns[0].mode, ChatMode::Regular);
}

#[tokio::test]
async fn filtered_reply_is_flagged() {
    let backend = Arc::new(StubBackend {
        filtered: true,
        ..StubBackend::default()
    });
    let mut ctx = create_test_context(backend, PathBuf::from("."));
    ctx.chat
        .start_new_session(Some(Persona::new(1, "wizard", false)));

    let (_, out) = run(&mut ctx, "tell me a secret").await;

    assert!(out.contains("filtered"));
}

#[tokio::test]
async fn custom_persona_can_be_used_by_id() {
    let (mut ctx, _) = create_stub_context();

    let (_, out) = run(&mut ctx, "/custom a tired detective").await;
    assert!(out.contains("/use 201"));
    assert!(ctx.chat.current_session().is_none());

    run(&mut ctx, "/use 201").await;
    assert_eq!(
        ctx.chat.current_persona().map(|p| p.description.as_str()),
        Some("a tired detective")
    );
}

#[tokio::test]
async fn use_falls_back_to_server_personas() {
    let backend = Arc::new(StubBackend::with_server_personas(vec![Persona::new(
        4,
        "a grumpy wizard",
        false,
    )]));
    let mut ctx = create_test_context(backend, PathBuf::from("."));

    run(&mut ctx, "/use 4").await;
    assert_eq!(ctx.chat.current_persona().map(|p| p.id), Some(4));

    let (_, out) = run(&mut ctx, "/use 99").await;
    assert!(out.contains("No persona with id 99"));
    assert_eq!(ctx.chat.current_persona().map(|p| p.id), Some(4));
}

#[tokio::test]
async fn listing_merges_server_and_local_personas() {
    let backend = Arc::new(StubBackend::with_server_personas(vec![Persona::new(
        4,
        "a grumpy wizard",
        false,
    )]));
    let mut ctx = create_test_context(backend, PathBuf::from("."));
    run(&mut ctx, "/custom a tired detective").await;

    let (_, out) = run(&mut ctx, "/personas").await;

    assert!(out.contains("a grumpy wizard"));
    assert_eq!(out.matches("a tired detective").count(), 1);
}

#[tokio::test]
async fn delete_reports_server_message() {
    let backend = Arc::new(StubBackend::with_server_personas(vec![Persona::new(
        7, "temp", true,
    )]));
    let mut ctx = create_test_context(backend.clone(), PathBuf::from("."));

    let (_, out) = run(&mut ctx, "/delete 7").await;

    assert!(out.contains("Persona deleted successfully"));
    assert!(backend.server_personas.lock().unwrap().is_empty());
}

#[tokio::test]
async fn download_writes_transcript() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(StubBackend::default());
    let mut ctx = create_test_context(backend, dir.path().to_path_buf());

    let (_, out) = run(&mut ctx, "/download").await;
    assert!(out.contains("Nothing to export"));

    run(&mut ctx, "/persona").await;
    run(&mut ctx, "hi").await;
    let (_, out) = run(&mut ctx, "/download").await;
    assert!(out.contains("Saved"));

    let session_id = ctx.chat.current_session().unwrap().id.clone();
    let written =
        std::fs::read_to_string(dir.path().join(format!("chat-{session_id}.txt"))).unwrap();
    assert_eq!(written, "User: hi\n\nAI: echo: hi");
}

#[tokio::test]
async fn quit_stops_the_loop() {
    let (mut ctx, _) = create_stub_context();
    let (action, out) = run(&mut ctx, "/quit").await;
    assert_eq!(action, LoopAction::Quit);
    assert!(out.is_empty());
}
