//! Terminal front end for interactive chat sessions.
//!
//! - [`chat_loop`]: reads input, dispatches it through [`crate::commands`],
//!   and awaits store operations.
//! - [`renderer`]: colored line output.
//! - [`theme`] and [`appearance`]: dark/light palette and its persistence.
//!
//! Ownership boundary: this layer presents state and captures input, while
//! [`crate::core`] owns sessions, personas, and backend coordination.

pub mod appearance;
pub mod chat_loop;
pub mod renderer;
pub mod theme;
