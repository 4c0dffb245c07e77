use super::CommandResult;
use crate::core::app::AppContext;

pub type CommandHandler = fn(&mut AppContext, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub input: &'a str,
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "/help",
        help: "Show available commands.",
        handler: super::handle_help,
    },
    Command {
        name: "persona",
        usage: "/persona",
        help: "Generate a new persona for the current chat.",
        handler: super::handle_persona,
    },
    Command {
        name: "custom",
        usage: "/custom <description>",
        help: "Create a custom persona from a description.",
        handler: super::handle_custom,
    },
    Command {
        name: "personas",
        usage: "/personas",
        help: "List personas known to the server and added this run.",
        handler: super::handle_personas,
    },
    Command {
        name: "use",
        usage: "/use <id>",
        help: "Start a new chat with the persona with this id.",
        handler: super::handle_use,
    },
    Command {
        name: "delete",
        usage: "/delete <id>",
        help: "Delete a custom persona on the server.",
        handler: super::handle_delete,
    },
    Command {
        name: "mode",
        usage: "/mode",
        help: "Toggle between regular and uncensored mode.",
        handler: super::handle_mode,
    },
    Command {
        name: "new",
        usage: "/new",
        help: "Start a fresh chat with the current persona.",
        handler: super::handle_new,
    },
    Command {
        name: "download",
        usage: "/download",
        help: "Export the conversation to chat-<session>.txt.",
        handler: super::handle_download,
    },
    Command {
        name: "theme",
        usage: "/theme",
        help: "Switch between dark and light colors and remember the choice.",
        handler: super::handle_theme,
    },
    Command {
        name: "quit",
        usage: "/quit",
        help: "Leave the chat.",
        handler: super::handle_quit,
    },
];
