//! Session engine: tick scheduling and lifecycle around the core game state.
//!
//! - [`session`]: synchronous fixed-interval driver with start/reset/halt and
//!   a [`FrameSink`] that receives every frame
//! - [`runtime`]: runs a session in a tokio task, publishing frames on a
//!   `watch` channel and taking `Reset`/`Shutdown` commands

pub mod runtime;
pub mod session;

pub use tui_packman_core as core;
pub use tui_packman_types as types;

pub use runtime::{spawn_session, Control, SessionHandle, SessionRuntime};
pub use session::{FrameSink, Session};
