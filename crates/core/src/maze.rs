//! Maze module - the live wall/pellet grid of a session
//!
//! Walls never change; pellets flip to empty when eaten. Uses a flat array
//! (row-major, `y * width + x`) for cache locality. Every accessor bounds-checks
//! before indexing, so out-of-range coordinates are answered, never indexed.

use crate::layout::{index_of, MazeLayout};
use crate::types::{CellCode, Position};

/// The mutable grid owned by one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: u16,
    height: u16,
    cells: Vec<CellCode>,
}

impl Maze {
    /// Create a maze in the layout's initial state
    pub fn from_layout(layout: &MazeLayout) -> Self {
        Self {
            width: layout.width(),
            height: layout.height(),
            cells: layout.cells().to_vec(),
        }
    }

    /// Restore every cell to the layout's initial code.
    ///
    /// Reuses the existing allocation.
    pub fn restore(&mut self, layout: &MazeLayout) {
        self.width = layout.width();
        self.height = layout.height();
        self.cells.clear();
        self.cells.extend_from_slice(layout.cells());
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<CellCode> {
        index_of(self.width, self.height, x, y).map(|i| self.cells[i])
    }

    /// True unless (x, y) is out of bounds or a wall.
    ///
    /// This is the only movement rule.
    pub fn is_passable(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(cell) if !cell.is_wall())
    }

    pub fn is_passable_at(&self, p: Position) -> bool {
        self.is_passable(p.x, p.y)
    }

    /// Eat the pellet at (x, y).
    ///
    /// Returns true when a pellet was there (the caller awards score);
    /// anything else is a no-op returning false.
    pub fn consume_pellet(&mut self, x: i16, y: i16) -> bool {
        match index_of(self.width, self.height, x, y) {
            Some(i) if self.cells[i] == CellCode::Pellet => {
                self.cells[i] = CellCode::Empty;
                true
            }
            _ => false,
        }
    }

    /// True while any pellet is left. Full scan.
    pub fn has_remaining_pellets(&self) -> bool {
        self.cells.iter().any(|&c| c == CellCode::Pellet)
    }

    pub fn pellet_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c == CellCode::Pellet).count() as u32
    }

    /// Row-major cells
    pub fn cells(&self) -> &[CellCode] {
        &self.cells
    }
}
