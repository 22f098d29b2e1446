//! Terminal presentation for the maze game.
//!
//! Snapshots are drawn into a plain framebuffer (no widget toolkit), then
//! flushed to the terminal as diffs against the previous frame.
//!
//! - [`game_view`]: pure snapshot -> framebuffer mapping, 2 columns per cell
//! - [`renderer`]: crossterm backend with full/diff encoding
//! - [`render_throttle`]: skip redraws of frames that did not change

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_packman_core as core;
pub use tui_packman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
