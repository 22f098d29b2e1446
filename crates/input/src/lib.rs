//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] and routes
//! steering into the shared pending-heading cell. Independent of any
//! rendering code.

pub mod listener;
pub mod map;

pub use tui_packman_core as core;
pub use tui_packman_types as types;

pub use listener::{InputListener, ListenerCommand};
pub use map::{handle_key_event, should_quit};
