//! TUI Packman (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_packman::{core,engine,input,term,types}`
//! and holds the binary's command-line and logging setup.

pub mod cli;
pub mod logging;

pub use tui_packman_core as core;
pub use tui_packman_engine as engine;
pub use tui_packman_input as input;
pub use tui_packman_term as term;
pub use tui_packman_types as types;
