//! Snapshot module - renderable frame handed to the presentation layer

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::game_state::Ghost;
use crate::layout::index_of;
use crate::types::{CellCode, GhostColor, Heading, Position, SessionStatus, MAX_GHOSTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GhostSnapshot {
    pub position: Position,
    pub heading: Heading,
    pub color: GhostColor,
}

impl From<&Ghost> for GhostSnapshot {
    fn from(value: &Ghost) -> Self {
        Self {
            position: value.position,
            heading: value.heading,
            color: value.color,
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cell codes
    pub cells: Vec<CellCode>,
    pub avatar: Position,
    pub heading: Heading,
    pub ghosts: ArrayVec<GhostSnapshot, MAX_GHOSTS>,
    pub score: u32,
    pub status: SessionStatus,
    pub pellets_remaining: u32,
    pub episode_id: u32,
    pub tick: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.avatar = Position::default();
        self.heading = Heading::Right;
        self.ghosts.clear();
        self.score = 0;
        self.status = SessionStatus::Running;
        self.pellets_remaining = 0;
        self.episode_id = 0;
        self.tick = 0;
    }

    pub fn cell(&self, x: i16, y: i16) -> Option<CellCode> {
        index_of(self.width, self.height, x, y).map(|i| self.cells[i])
    }

    /// First ghost standing on `p`, if any
    pub fn ghost_at(&self, p: Position) -> Option<&GhostSnapshot> {
        self.ghosts.iter().find(|g| g.position == p)
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }

    /// Cheap change detector for render throttling
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            avatar: Position::default(),
            heading: Heading::Right,
            ghosts: ArrayVec::new(),
            score: 0,
            status: SessionStatus::Running,
            pellets_remaining: 0,
            episode_id: 0,
            tick: 0,
        }
    }
}
