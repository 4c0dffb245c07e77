//! Faceless is a terminal client for persona-driven chat backends.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the chat session state, persona handling, configuration,
//!   and the backend client seam.
//! - [`api`] defines the wire payloads exchanged with the remote service.
//! - [`ui`] holds the theme preference store, palette, and the line-based
//!   interactive chat loop.
//! - [`commands`] implements slash-command parsing used by the chat loop.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which builds a [`core::app::AppContext`] and
//! dispatches into [`ui::chat_loop`] or one of the one-shot subcommands.

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
