//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Reference Maze
//!
//! The reference layout is a fixed 20x15 grid:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Avatar start**: (1, 1)
//!
//! Other layouts can be supplied at construction time; only the reference
//! dimensions live here.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Interval between update steps |
//! | `PELLET_REWARD` | 10 | Score per pellet eaten |
//! | `GHOST_COUNT` | 3 | Ghosts in a default session |
//! | `MAX_GHOSTS` | 8 | Upper bound on configured ghosts |
//! | `GHOST_REDIRECT_PERCENT` | 20 | Chance a ghost turns on an open path |
//!
//! # Examples
//!
//! ```
//! use tui_packman_types::{Heading, Position, GameAction};
//!
//! let p = Position::new(1, 1);
//! assert_eq!(p.step(Heading::Right), Position::new(2, 1));
//!
//! assert_eq!(Heading::from_str("up"), Some(Heading::Up));
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//! ```

/// Reference maze width in cells (20 columns)
pub const GRID_WIDTH: u16 = 20;

/// Reference maze height in cells (15 rows)
pub const GRID_HEIGHT: u16 = 15;

/// Fixed interval between update steps in milliseconds
pub const TICK_MS: u32 = 200;

/// Points awarded for each pellet eaten
pub const PELLET_REWARD: u32 = 10;

/// Number of ghosts in a default session
pub const GHOST_COUNT: usize = 3;

/// Hard cap on ghosts per session (fixed-capacity storage)
pub const MAX_GHOSTS: usize = 8;

/// Percent chance that a ghost picks a new heading even when its path is open
pub const GHOST_REDIRECT_PERCENT: u32 = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_constants() {
        assert_eq!(GRID_WIDTH, 20);
        assert_eq!(GRID_HEIGHT, 15);
        assert_eq!(TICK_MS, 200);
        assert_eq!(PELLET_REWARD, 10);
        assert!(GHOST_COUNT <= MAX_GHOSTS);
        assert!(GHOST_REDIRECT_PERCENT <= 100);
    }

    #[test]
    fn headings_are_unit_vectors() {
        for h in Heading::ALL {
            let (dx, dy) = h.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", h);
            assert_eq!(Heading::from_u8(h.as_u8()), Some(h));
        }
    }

    #[test]
    fn position_step_can_leave_the_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Heading::Left), Position::new(-1, 0));
        assert_eq!(origin.step(Heading::Up), Position::new(0, -1));
    }

    #[test]
    fn ghost_palette_cycles() {
        assert_eq!(GhostColor::for_index(0), GhostColor::Red);
        assert_eq!(GhostColor::for_index(3), GhostColor::Orange);
        assert_eq!(GhostColor::for_index(4), GhostColor::Red);
    }
}

/// The state of one grid cell
///
/// The numeric codes match the original map encoding:
/// 0 = empty, 1 = wall, 2 = pellet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellCode {
    #[default]
    Empty,
    Wall,
    Pellet,
}

impl CellCode {
    /// Decode a numeric map code
    ///
    /// ```
    /// use tui_packman_types::CellCode;
    ///
    /// assert_eq!(CellCode::from_u8(1), Some(CellCode::Wall));
    /// assert_eq!(CellCode::from_u8(7), None);
    /// ```
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellCode::Empty),
            1 => Some(CellCode::Wall),
            2 => Some(CellCode::Pellet),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            CellCode::Empty => 0,
            CellCode::Wall => 1,
            CellCode::Pellet => 2,
        }
    }

    /// Parse an ASCII map glyph: `#` wall, `.` pellet, space or `_` empty
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellCode::Wall),
            '.' => Some(CellCode::Pellet),
            ' ' | '_' => Some(CellCode::Empty),
            _ => None,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, CellCode::Wall)
    }
}

/// Movement direction of an actor
///
/// Screen coordinates: `Up` decreases the row, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// All four headings, in the order random draws index into
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Unit vector `(dx, dy)` for this heading
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// Parse heading from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Heading::Up),
            "down" | "d" => Some(Heading::Down),
            "left" | "l" => Some(Heading::Left),
            "right" | "r" => Some(Heading::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        }
    }

    /// Compact encoding used by the shared pending-heading cell
    pub fn as_u8(&self) -> u8 {
        match self {
            Heading::Up => 0,
            Heading::Down => 1,
            Heading::Left => 2,
            Heading::Right => 3,
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        Heading::ALL.get(v as usize).copied()
    }
}

/// Grid coordinate `(x, y)`: column and row, 0-indexed from the top-left
///
/// Signed so that a candidate one step past the edge is representable and can
/// be rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in direction `heading`
    pub fn step(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ghost display colour, drawn from a fixed palette of four
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostColor {
    Red,
    Pink,
    Cyan,
    Orange,
}

impl GhostColor {
    pub const PALETTE: [GhostColor; 4] = [
        GhostColor::Red,
        GhostColor::Pink,
        GhostColor::Cyan,
        GhostColor::Orange,
    ];

    /// Colour for the ghost at `index`, cycling through the palette
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GhostColor::Red => "red",
            GhostColor::Pink => "pink",
            GhostColor::Cyan => "cyan",
            GhostColor::Orange => "orange",
        }
    }
}

/// Session outcome state
///
/// Transitions only `Running -> Lost` or `Running -> Won`; a reset returns to
/// `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Running,
    Lost,
    Won,
}

impl SessionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Running => "running",
            SessionStatus::Lost => "lost",
            SessionStatus::Won => "won",
        }
    }
}

/// Player intents produced by input mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change the avatar's pending heading
    Steer(Heading),
    /// Reset the session to its initial state
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// ```
    /// use tui_packman_types::{GameAction, Heading};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Steer(Heading::Left)));
    /// assert_eq!(GameAction::from_str("RESTART"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Heading::from_str(s).map(GameAction::Steer)
    }
}
