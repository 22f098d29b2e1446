//! Maze layout - the immutable starting configuration of a session
//!
//! A layout is plain data handed to [`GameState::new`](crate::GameState::new):
//! dimensions, the initial cell codes, the avatar start and the ordered ghost
//! start cells. Every reset restores the live maze from it, so several
//! sessions (or tests) can share one layout without leaking state.

use crate::error::LayoutError;
use crate::types::{CellCode, Position, GRID_HEIGHT, GRID_WIDTH};

/// Reference map, numeric codes: 0 = empty, 1 = wall, 2 = pellet
const REFERENCE_MAP: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1, 2, 1],
    [1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 1, 1, 2, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1, 2, 1, 1, 2, 1],
    [1, 2, 2, 2, 2, 1, 2, 2, 2, 1, 1, 2, 2, 2, 1, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 2, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 2, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 2, 2, 1],
    [1, 2, 1, 1, 2, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 2, 1, 1, 2, 1],
    [1, 2, 2, 2, 2, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 2, 2, 2, 2, 1],
    [1, 2, 1, 1, 2, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 2, 1, 1, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1, 2, 1, 1, 1, 2, 1, 1, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Avatar start on the reference map
pub const REFERENCE_AVATAR_START: Position = Position::new(1, 1);

/// Ghost starts on the reference map: top-right, bottom-left, bottom-right, centre
pub const REFERENCE_GHOST_STARTS: [Position; 4] = [
    Position::new(18, 1),
    Position::new(1, 13),
    Position::new(18, 13),
    Position::new(10, 8),
];

/// Largest width or height a layout may have
pub const MAX_DIMENSION: u16 = i16::MAX as u16;

/// Validated, immutable starting configuration of a maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeLayout {
    width: u16,
    height: u16,
    /// Row-major cell codes (y * width + x)
    cells: Vec<CellCode>,
    avatar_start: Position,
    ghost_starts: Vec<Position>,
}

impl MazeLayout {
    /// Build a layout from row-major cell codes.
    ///
    /// Every start cell must be inside the maze and not a wall, and at least
    /// one ghost start is required (ghost `i` uses start `i % len`).
    pub fn new(
        width: u16,
        height: u16,
        cells: Vec<CellCode>,
        avatar_start: Position,
        ghost_starts: Vec<Position>,
    ) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::ZeroSized { width, height });
        }
        // Positions are i16; one step past the last column must not overflow.
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(LayoutError::TooLarge { width, height });
        }
        if cells.len() != width as usize * height as usize {
            return Err(LayoutError::CellCountMismatch {
                width,
                height,
                found: cells.len(),
            });
        }

        let layout = Self {
            width,
            height,
            cells,
            avatar_start,
            ghost_starts,
        };

        if !layout.is_open(avatar_start) {
            return Err(LayoutError::BlockedStart {
                actor: "avatar",
                position: avatar_start,
            });
        }
        if layout.ghost_starts.is_empty() {
            return Err(LayoutError::NoGhostStarts);
        }
        if let Some(&bad) = layout.ghost_starts.iter().find(|&&p| !layout.is_open(p)) {
            return Err(LayoutError::BlockedStart {
                actor: "ghost",
                position: bad,
            });
        }

        Ok(layout)
    }

    /// Build a layout from ASCII rows: `#` wall, `.` pellet, space or `_` empty.
    ///
    /// ```
    /// use tui_packman_core::MazeLayout;
    /// use tui_packman_types::{CellCode, Position};
    ///
    /// let layout = MazeLayout::from_rows(
    ///     &["#####", "#. .#", "#####"],
    ///     Position::new(1, 1),
    ///     vec![Position::new(3, 1)],
    /// )
    /// .unwrap();
    /// assert_eq!(layout.width(), 5);
    /// assert_eq!(layout.cell(1, 1), Some(CellCode::Pellet));
    /// assert_eq!(layout.cell(2, 1), Some(CellCode::Empty));
    /// ```
    pub fn from_rows(
        rows: &[&str],
        avatar_start: Position,
        ghost_starts: Vec<Position>,
    ) -> Result<Self, LayoutError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell =
                    CellCode::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph { glyph, x, y })?;
                cells.push(cell);
            }
        }

        Self::new(
            dimension(width),
            dimension(rows.len()),
            cells,
            avatar_start,
            ghost_starts,
        )
    }

    /// Build a layout from numeric rows (0 = empty, 1 = wall, 2 = pellet).
    pub fn from_codes<const W: usize>(
        rows: &[[u8; W]],
        avatar_start: Position,
        ghost_starts: Vec<Position>,
    ) -> Result<Self, LayoutError> {
        let mut cells = Vec::with_capacity(W * rows.len());
        for (index, &code) in rows.iter().flatten().enumerate() {
            cells.push(CellCode::from_u8(code).ok_or(LayoutError::UnknownCode { code, index })?);
        }
        Self::new(
            dimension(W),
            dimension(rows.len()),
            cells,
            avatar_start,
            ghost_starts,
        )
    }

    /// The 20x15 reference maze.
    pub fn reference() -> Self {
        let cells = REFERENCE_MAP
            .iter()
            .flatten()
            .map(|&code| CellCode::from_u8(code).unwrap_or(CellCode::Wall))
            .collect();
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cells,
            avatar_start: REFERENCE_AVATAR_START,
            ghost_starts: REFERENCE_GHOST_STARTS.to_vec(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[CellCode] {
        &self.cells
    }

    pub fn avatar_start(&self) -> Position {
        self.avatar_start
    }

    pub fn ghost_starts(&self) -> &[Position] {
        &self.ghost_starts
    }

    /// Start cell for the ghost at `index`, cycling through the start list
    pub fn ghost_start(&self, index: usize) -> Position {
        self.ghost_starts[index % self.ghost_starts.len()]
    }

    /// Initial code of cell (x, y), `None` when out of bounds
    pub fn cell(&self, x: i16, y: i16) -> Option<CellCode> {
        index_of(self.width, self.height, x, y).map(|i| self.cells[i])
    }

    fn is_open(&self, p: Position) -> bool {
        matches!(self.cell(p.x, p.y), Some(c) if !c.is_wall())
    }
}

impl Default for MazeLayout {
    fn default() -> Self {
        Self::reference()
    }
}

/// Row-major index of (x, y), `None` when out of bounds
#[inline(always)]
pub(crate) fn index_of(width: u16, height: u16, x: i16, y: i16) -> Option<usize> {
    if x < 0 || y < 0 || x as u16 >= width || y as u16 >= height {
        return None;
    }
    Some((y as usize) * (width as usize) + (x as usize))
}

// Dimensions beyond u16 cannot be addressed by `Position`; saturate so the
// cell-count check rejects them.
fn dimension(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
