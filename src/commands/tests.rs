use super::*;
use crate::core::persona::Persona;
use crate::core::session::ChatMode;
use crate::utils::test_utils::create_stub_context;

#[test]
fn plain_text_is_sent_as_message() {
    let (mut ctx, _) = create_stub_context();
    assert_eq!(
        process_input(&mut ctx, "  hello there  "),
        CommandResult::ProcessAsMessage("hello there".to_string())
    );
}

#[test]
fn blank_line_does_nothing() {
    let (mut ctx, _) = create_stub_context();
    assert_eq!(process_input(&mut ctx, "   "), CommandResult::Continue);
}

#[test]
fn lone_slash_is_sent_as_message() {
    let (mut ctx, _) = create_stub_context();
    assert_eq!(
        process_input(&mut ctx, "/"),
        CommandResult::ProcessAsMessage("/".to_string())
    );
}

#[test]
fn unknown_command_is_reported_not_sent() {
    let (mut ctx, _) = create_stub_context();
    match process_input(&mut ctx, "/frobnicate now") {
        CommandResult::Notice(text) => assert!(text.contains("/frobnicate")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn command_names_are_case_insensitive() {
    let (mut ctx, _) = create_stub_context();
    assert_eq!(process_input(&mut ctx, "/QUIT"), CommandResult::Quit);
    assert_eq!(
        process_input(&mut ctx, "/Persona"),
        CommandResult::GeneratePersona
    );
}

#[test]
fn custom_takes_the_rest_of_the_line() {
    let (mut ctx, _) = create_stub_context();
    assert_eq!(
        process_input(&mut ctx, "/custom a sarcastic  lighthouse keeper "),
        CommandResult::AddPersona("a sarcastic  lighthouse keeper".to_string())
    );
}

#[test]
fn custom_without_description_shows_usage() {
    let (mut ctx, _) = create_stub_context();
    assert_eq!(
        process_input(&mut ctx, "/custom"),
        CommandResult::Notice("Usage: /custom <description>".to_string())
    );
}

#[test]
fn persona_ids_are_parsed() {
    let (mut ctx, _) = create_stub_context();
    assert_eq!(
        process_input(&mut ctx, "/delete 7"),
        CommandResult::DeletePersona(7)
    );
    assert_eq!(process_input(&mut ctx, "/use 12"), CommandResult::UsePersona(12));
    assert_eq!(
        process_input(&mut ctx, "/delete seven"),
        CommandResult::Notice("Usage: /delete <id>".to_string())
    );
}

#[test]
fn mode_without_session_leaves_state_alone() {
    let (mut ctx, _) = create_stub_context();
    assert!(matches!(
        process_input(&mut ctx, "/mode"),
        CommandResult::Notice(_)
    ));
    assert!(ctx.chat.current_session().is_none());
}

#[test]
fn mode_toggles_current_session() {
    let (mut ctx, _) = create_stub_context();
    ctx.chat
        .start_new_session(Some(Persona::new(1, "wizard", false)));

    assert_eq!(
        process_input(&mut ctx, "/mode"),
        CommandResult::Notice("Mode: uncensored".to_string())
    );
    assert_eq!(ctx.chat.current_mode(), ChatMode::Uncensored);

    process_input(&mut ctx, "/mode");
    assert_eq!(ctx.chat.current_mode(), ChatMode::Regular);
}

#[test]
fn new_keeps_persona_and_replaces_session() {
    let (mut ctx, _) = create_stub_context();
    ctx.chat
        .start_new_session(Some(Persona::new(1, "wizard", false)));
    ctx.chat.toggle_mode();
    let old_id = ctx.chat.current_session().map(|s| s.id.clone());

    process_input(&mut ctx, "/new");

    let session = ctx.chat.current_session().expect("session");
    assert_ne!(Some(session.id.clone()), old_id);
    assert_eq!(session.persona.as_ref().map(|p| p.id), Some(1));
    assert_eq!(session.mode, ChatMode::Regular);
    assert!(session.messages.is_empty());
}

#[test]
fn theme_toggles_and_saves() {
    let (mut ctx, _) = create_stub_context();
    assert!(!ctx.theme.is_dark());

    assert_eq!(
        process_input(&mut ctx, "/theme"),
        CommandResult::Notice("Theme: dark".to_string())
    );
    assert!(ctx.theme.is_dark());
}

#[test]
fn help_lists_every_command() {
    let text = help_text();
    for command in all_commands() {
        assert!(text.contains(command.usage), "missing {}", command.usage);
    }
}
