//! Core game logic module - pure, seeded, and testable
//!
//! This module contains the maze rules, session state and update cycle.
//! It has **zero dependencies** on terminal, input devices or timers, making it:
//!
//! - **Reproducible**: the same seed and layout produce the same ghost walk
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: runs headless, in the terminal front end, or in a bench
//!
//! # Module Structure
//!
//! - [`layout`]: immutable starting configuration (walls, pellets, start cells)
//! - [`maze`]: live grid with passability and pellet consumption
//! - [`game_state`]: avatar, ghosts, score, status and the per-tick cycle
//! - [`rng`]: seeded LCG for ghost headings and redirects
//! - [`snapshot`]: renderable frame handed to the presentation layer
//! - [`pending`]: the heading cell shared with the input listener
//! - [`config`]: tunables (tick interval, ghost count, seed)
//!
//! # Rules
//!
//! - **Movement**: one cell per tick along the heading; walls and edges block
//! - **Pellets**: +10 each, eaten once
//! - **Ghosts**: random walk, turning when blocked or with a 20% chance
//! - **Loss**: avatar and a ghost share a cell after movement
//! - **Win**: no pellets left (checked after collision; a loss takes precedence)
//!
//! # Example
//!
//! ```
//! use tui_packman_core::GameState;
//! use tui_packman_types::{GameAction, Heading, Position};
//!
//! let mut game = GameState::with_seed(12345);
//! game.start();
//!
//! game.apply_action(GameAction::Steer(Heading::Right));
//! let frame = game.step();
//!
//! assert_eq!(frame.avatar, Position::new(2, 1));
//! assert_eq!(frame.score, 10);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod layout;
pub mod maze;
pub mod pending;
pub mod rng;
pub mod snapshot;

pub use tui_packman_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{ConfigError, LayoutError};
pub use game_state::{Avatar, GameState, Ghost, TickEvents};
pub use layout::MazeLayout;
pub use maze::Maze;
pub use pending::PendingHeading;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, GhostSnapshot};
