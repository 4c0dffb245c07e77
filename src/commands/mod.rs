//! Slash commands typed into the chat loop.
//!
//! Commands that only touch local state run right here. Anything that has
//! to reach the backend is handed back to the chat loop as a
//! [`CommandResult`] so the loop can await it.

mod registry;

pub use registry::{all_commands, find_command, Command, CommandInvocation};

use crate::core::app::AppContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    /// Informational text to show the user
    Notice(String),
    ProcessAsMessage(String),
    GeneratePersona,
    AddPersona(String),
    ListPersonas,
    UsePersona(i64),
    DeletePersona(i64),
    Download,
    Quit,
}

pub fn process_input(ctx: &mut AppContext, input: &str) -> CommandResult {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return CommandResult::Continue;
    }
    if !trimmed.starts_with('/') {
        return CommandResult::ProcessAsMessage(trimmed.to_string());
    }

    let mut parts = trimmed[1..].splitn(2, char::is_whitespace);
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(trimmed.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    match find_command(command_name) {
        Some(command) => {
            let invocation = CommandInvocation {
                input: trimmed,
                args,
            };
            (command.handler)(ctx, invocation)
        }
        None => CommandResult::Notice(format!(
            "Unknown command: /{command_name}. Type /help for a list."
        )),
    }
}

pub fn help_text() -> String {
    let width = all_commands()
        .iter()
        .map(|command| command.usage.len())
        .max()
        .unwrap_or(0);
    let mut text = String::from("Commands:");
    for command in all_commands() {
        text.push_str(&format!("\n  {:<width$}  {}", command.usage, command.help));
    }
    text.push_str("\nAnything else is sent to the current persona.");
    text
}

fn parse_persona_id(args: &str, usage: &str) -> Result<i64, CommandResult> {
    args.parse::<i64>()
        .map_err(|_| CommandResult::Notice(format!("Usage: {usage}")))
}

pub(super) fn handle_help(_ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::Notice(help_text())
}

pub(super) fn handle_persona(_ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::GeneratePersona
}

pub(super) fn handle_custom(_ctx: &mut AppContext, invocation: CommandInvocation<'_>) -> CommandResult {
    if invocation.args.is_empty() {
        return CommandResult::Notice("Usage: /custom <description>".to_string());
    }
    CommandResult::AddPersona(invocation.args.to_string())
}

pub(super) fn handle_personas(_ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::ListPersonas
}

pub(super) fn handle_use(_ctx: &mut AppContext, invocation: CommandInvocation<'_>) -> CommandResult {
    match parse_persona_id(invocation.args, "/use <id>") {
        Ok(id) => CommandResult::UsePersona(id),
        Err(usage) => usage,
    }
}

pub(super) fn handle_delete(_ctx: &mut AppContext, invocation: CommandInvocation<'_>) -> CommandResult {
    match parse_persona_id(invocation.args, "/delete <id>") {
        Ok(id) => CommandResult::DeletePersona(id),
        Err(usage) => usage,
    }
}

pub(super) fn handle_mode(ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    if ctx.chat.current_session().is_none() {
        return CommandResult::Notice("No active chat. Try /persona first.".to_string());
    }
    ctx.chat.toggle_mode();
    CommandResult::Notice(format!("Mode: {}", ctx.chat.current_mode()))
}

pub(super) fn handle_new(ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    let persona = ctx.chat.current_persona().cloned();
    let notice = match &persona {
        Some(persona) => format!("New chat with {}", persona.label()),
        None => "New chat started. Pick a persona with /persona or /use.".to_string(),
    };
    ctx.chat.start_new_session(persona);
    CommandResult::Notice(notice)
}

pub(super) fn handle_download(_ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::Download
}

pub(super) fn handle_theme(ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    ctx.theme.toggle_theme();
    ctx.theme.save_theme();
    CommandResult::Notice(format!("Theme: {}", ctx.theme.appearance()))
}

pub(super) fn handle_quit(_ctx: &mut AppContext, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::Quit
}

#[cfg(test)]
mod tests;
