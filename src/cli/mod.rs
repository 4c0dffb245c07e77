//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod persona;
pub mod say;
pub mod settings;


use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::persona::{run_health, run_persona};
use crate::cli::say::run_say;
use crate::cli::settings::{describe_settings, run_set, run_unset, SettingRegistry};
use crate::core::config::Config;
use crate::core::constants::LOG_FILTER_ENV;
use crate::ui::chat_loop::run_chat;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "faceless")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Chat with generated personas from the terminal")]
#[command(
    long_about = "Faceless is a terminal client for a persona chat service. The service invents \
a persona (or takes your description of one) and answers in character.\n\n\
Environment Variables:\n\
  FACELESS_API_BASE_URL   Backend address (defaults to http://localhost:8000)\n\
  FACELESS_LOG            Log filter, e.g. debug or faceless=trace (defaults to warn)\n\n\
Chat commands:\n\
  /persona          Generate a new persona\n\
  /custom <text>    Describe your own persona\n\
  /mode             Toggle regular and uncensored replies\n\
  /download         Save the conversation to a text file\n\
  /help             List every command"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend address, overriding the environment and config file
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive chat (default)
    Chat,
    /// Generate a persona, send it one message, and print the reply
    Say {
        /// Ask for an uncensored reply
        #[arg(short, long)]
        uncensored: bool,
        /// Message to send
        #[arg(trailing_var_arg = true)]
        prompt: Vec<String>,
    },
    /// Manage personas on the server
    Persona {
        #[command(subcommand)]
        command: PersonaCommands,
    },
    /// Check that the backend is reachable
    Health,
    /// Set configuration values
    Set {
        /// Configuration key to set (base-url, export-dir, theme)
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum PersonaCommands {
    /// Ask the server to invent a persona
    Generate,
    /// Create a custom persona from a description
    Add {
        #[arg(trailing_var_arg = true, required = true)]
        description: Vec<String>,
    },
    /// List personas known to the server
    List,
    /// Delete a custom persona
    Delete { id: i64 },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let runtime = tokio::runtime::Runtime::new()?;
    if let Err(err) = runtime.block_on(async_main()) {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let base_url = args.base_url;

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(base_url).await,
        Commands::Say { uncensored, prompt } => run_say(prompt, uncensored, base_url).await,
        Commands::Persona { command } => run_persona(command, base_url).await,
        Commands::Health => run_health(base_url).await,
        Commands::Set { key, value } => {
            let registry = SettingRegistry::new();
            match key {
                Some(key) if !value.is_empty() => match run_set(&registry, &key, &value) {
                    Ok(message) => println!("{message}"),
                    Err(err) => {
                        err.print();
                        std::process::exit(1);
                    }
                },
                _ => {
                    let config = Config::load()?;
                    println!("{}", describe_settings(&registry, &config));
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let registry = SettingRegistry::new();
            match run_unset(&registry, &key) {
                Ok(message) => println!("{message}"),
                Err(err) => {
                    err.print();
                    std::process::exit(1);
                }
            }
            Ok(())
        }
    }
}
