use std::io::{self, Write};

use tracing::debug;

use crate::commands::{process_input, CommandResult};
use crate::core::app::{AppContext, ChatError};
use crate::core::config::data::path_display;
use crate::core::persona::Persona;
use crate::ui::renderer::{render_error, render_info, render_message, render_persona};

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Quit,
}

/// Run one line of user input to completion and print what happened.
pub async fn handle_line<W: Write>(
    ctx: &mut AppContext,
    line: &str,
    out: &mut W,
) -> io::Result<LoopAction> {
    let result = process_input(ctx, line);
    debug!(?result, "input processed");
    let palette = *ctx.theme.palette();

    match result {
        CommandResult::Continue => {}
        CommandResult::Quit => return Ok(LoopAction::Quit),
        CommandResult::Notice(text) => render_info(out, &palette, &text)?,
        CommandResult::ProcessAsMessage(text) => send(ctx, &text, out).await?,
        CommandResult::GeneratePersona => generate(ctx, out).await?,
        CommandResult::AddPersona(description) => {
            match ctx.chat.add_custom_persona(&description).await {
                Ok(persona) => {
                    render_persona(out, &palette, &persona, "+")?;
                    render_info(
                        out,
                        &palette,
                        &format!("Chat with it using /use {}", persona.id),
                    )?;
                }
                Err(err) => report(ctx, &err, out)?,
            }
        }
        CommandResult::ListPersonas => list_personas(ctx, out).await?,
        CommandResult::UsePersona(id) => use_persona(ctx, id, out).await?,
        CommandResult::DeletePersona(id) => match ctx.chat.backend().delete_persona(id).await {
            Ok(message) => render_info(out, &palette, &message)?,
            Err(err) => render_error(out, &palette, &format!("Failed to delete persona: {err}"))?,
        },
        CommandResult::Download => match ctx.chat.download_chat_history() {
            Ok(Some(path)) => {
                render_info(out, &palette, &format!("Saved {}", path_display(&path)))?
            }
            Ok(None) => render_info(out, &palette, "Nothing to export yet.")?,
            Err(err) => render_error(out, &palette, &err.to_string())?,
        },
    }

    Ok(LoopAction::Continue)
}

/// Ask for a fresh persona and announce it.
pub async fn generate<W: Write>(ctx: &mut AppContext, out: &mut W) -> io::Result<()> {
    ctx.chat.generate_persona().await;
    let palette = *ctx.theme.palette();
    if let Some(error) = ctx.chat.error() {
        return render_error(out, &palette, error);
    }
    match ctx.chat.current_persona() {
        Some(persona) => render_persona(out, &palette, persona, "Now chatting with"),
        None => Ok(()),
    }
}

async fn send<W: Write>(ctx: &mut AppContext, text: &str, out: &mut W) -> io::Result<()> {
    let palette = *ctx.theme.palette();
    match ctx.chat.send_message(text).await {
        Ok(response) => {
            if let Some(reply) = ctx.chat.messages().last() {
                render_message(out, &palette, reply)?;
            }
            if response.filtered == Some(true) {
                render_info(out, &palette, "(this reply was filtered)")?;
            }
            Ok(())
        }
        Err(ChatError::InvalidOperation(_)) => render_info(
            out,
            &palette,
            "No persona yet. Use /persona to generate one or /custom to describe one.",
        ),
        Err(err) => report(ctx, &err, out),
    }
}

async fn list_personas<W: Write>(ctx: &mut AppContext, out: &mut W) -> io::Result<()> {
    let palette = *ctx.theme.palette();
    let mut personas = match ctx.chat.backend().get_personas().await {
        Ok(personas) => personas,
        Err(err) => {
            render_error(out, &palette, &format!("Failed to list personas: {err}"))?;
            Vec::new()
        }
    };
    for persona in ctx.chat.available_personas() {
        if !personas.iter().any(|known| known.id == persona.id) {
            personas.push(persona.clone());
        }
    }

    if personas.is_empty() {
        return render_info(out, &palette, "No personas yet.");
    }
    let current = ctx.chat.current_persona().map(|p| p.id);
    for persona in &personas {
        let marker = if Some(persona.id) == current { "*" } else { "•" };
        render_persona(out, &palette, persona, marker)?;
    }
    Ok(())
}

async fn use_persona<W: Write>(ctx: &mut AppContext, id: i64, out: &mut W) -> io::Result<()> {
    let palette = *ctx.theme.palette();
    if ctx.chat.select_persona(id).is_err() {
        let found: Option<Persona> = match ctx.chat.backend().get_personas().await {
            Ok(personas) => personas.into_iter().find(|p| p.id == id),
            Err(err) => {
                return render_error(out, &palette, &format!("Failed to list personas: {err}"))
            }
        };
        match found {
            Some(persona) => ctx.chat.start_new_session(Some(persona)),
            None => return render_error(out, &palette, &format!("No persona with id {id}")),
        }
    }
    match ctx.chat.current_persona() {
        Some(persona) => render_persona(out, &palette, persona, "Now chatting with"),
        None => Ok(()),
    }
}

/// Print the store's short error line followed by the underlying cause.
fn report<W: Write>(ctx: &AppContext, err: &ChatError, out: &mut W) -> io::Result<()> {
    let palette = ctx.theme.palette();
    match ctx.chat.error() {
        Some(summary) => render_error(out, palette, &format!("{summary}: {err}")),
        None => render_error(out, palette, &err.to_string()),
    }
}
