//! Line-oriented output for the chat loop, colored with the active [`Theme`].

use std::io::{self, Write};

use ratatui::crossterm::style::Stylize;

use crate::core::message::ChatMessage;
use crate::core::persona::Persona;
use crate::core::session::ChatMode;
use crate::ui::theme::Theme;

pub fn render_message<W: Write>(out: &mut W, theme: &Theme, message: &ChatMessage) -> io::Result<()> {
    let (prefix, text) = if message.is_user {
        (
            format!("{}:", message.speaker()).with(theme.user_prefix).bold(),
            message.content.as_str().with(theme.user_text),
        )
    } else {
        (
            format!("{}:", message.speaker()).with(theme.ai_prefix).bold(),
            message.content.as_str().with(theme.ai_text),
        )
    };
    writeln!(out, "{prefix} {text}")
}

pub fn render_info<W: Write>(out: &mut W, theme: &Theme, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.with(theme.info))
}

pub fn render_error<W: Write>(out: &mut W, theme: &Theme, text: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("❌ {text}").with(theme.error))
}

pub fn render_persona<W: Write>(
    out: &mut W,
    theme: &Theme,
    persona: &Persona,
    marker: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{marker} {} {}",
        persona.label().with(theme.ai_prefix),
        persona.description.as_str().with(theme.ai_text)
    )
}

/// Input prompt showing the current mode, e.g. `[regular] > `.
pub fn render_prompt<W: Write>(out: &mut W, theme: &Theme, mode: ChatMode) -> io::Result<()> {
    write!(out, "{}", format!("[{mode}] > ").with(theme.prompt))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn messages_carry_speaker_and_content() {
        let theme = Theme::dark();
        let user = rendered(|out| render_message(out, &theme, &ChatMessage::user("1", "hello")));
        let ai = rendered(|out| render_message(out, &theme, &ChatMessage::ai("2", "hi there")));

        assert!(user.contains("User:"));
        assert!(user.contains("hello"));
        assert!(ai.contains("AI:"));
        assert!(ai.contains("hi there"));
        assert!(ai.ends_with('\n'));
    }

    #[test]
    fn errors_are_prefixed() {
        let out = rendered(|out| render_error(out, &Theme::light(), "Failed to send message"));
        assert!(out.contains("❌ Failed to send message"));
    }

    #[test]
    fn prompt_names_mode_without_newline() {
        let out = rendered(|out| render_prompt(out, &Theme::light(), ChatMode::Uncensored));
        assert!(out.contains("[uncensored] > "));
        assert!(!out.ends_with('\n'));
    }
}
