//! Construction-time errors.
//!
//! Gameplay itself has no failure paths: blocked moves and unknown keys are
//! no-ops. Only building a layout or a configuration can be rejected.

use thiserror::Error;

use crate::types::{Position, MAX_GHOSTS};

/// Errors raised when validating a maze layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("maze must be at least 1x1 (got {width}x{height})")]
    ZeroSized { width: u16, height: u16 },
    #[error("maze {width}x{height} exceeds the {max}x{max} addressable limit", max = i16::MAX)]
    TooLarge { width: u16, height: u16 },
    #[error("maze is {width}x{height} but {found} cells were supplied")]
    CellCountMismatch {
        width: u16,
        height: u16,
        found: usize,
    },
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
    #[error("unknown map code {code} at index {index}")]
    UnknownCode { code: u8, index: usize },
    #[error("{actor} start {position:?} is outside the maze or on a wall")]
    BlockedStart {
        actor: &'static str,
        position: Position,
    },
    #[error("layout has no ghost start cells")]
    NoGhostStarts,
}

/// Errors raised when validating a game configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be positive")]
    ZeroTick,
    #[error("ghost count {0} exceeds the maximum of {max}", max = MAX_GHOSTS)]
    TooManyGhosts(usize),
    #[error("redirect chance {0}% is above 100%")]
    RedirectOutOfRange(u32),
}
