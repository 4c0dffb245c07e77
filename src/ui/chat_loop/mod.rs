//! Interactive chat loop.
//!
//! Reads lines from stdin, hands each to [`crate::commands`], and awaits the
//! resulting store operation before printing and reading the next line.

mod dispatch;
mod setup;

#[cfg(test)]
mod tests;

pub use dispatch::{handle_line, LoopAction};
pub use setup::bootstrap_context;

use std::error::Error;
use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::ui::renderer::{render_info, render_prompt};

pub async fn run_chat(base_url: Option<String>) -> Result<(), Box<dyn Error>> {
    let mut ctx = bootstrap_context(base_url.as_deref())?;
    let mut stdout = io::stdout();

    render_info(
        &mut stdout,
        ctx.theme.palette(),
        &format!(
            "Faceless v{} connected to {}. Type /help for commands.",
            env!("CARGO_PKG_VERSION"),
            ctx.base_url
        ),
    )?;
    dispatch::generate(&mut ctx, &mut stdout).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        render_prompt(&mut stdout, ctx.theme.palette(), ctx.chat.current_mode())?;
        let Some(line) = lines.next_line().await? else {
            writeln!(stdout)?;
            break;
        };
        if handle_line(&mut ctx, &line, &mut stdout).await? == LoopAction::Quit {
            break;
        }
    }

    info!(messages = ctx.chat.messages().len(), "chat loop finished");
    Ok(())
}
