//! Maze and layout tests against the reference map

use proptest::prelude::*;

use tui_packman::core::layout::{REFERENCE_AVATAR_START, REFERENCE_GHOST_STARTS};
use tui_packman::core::{LayoutError, Maze, MazeLayout};
use tui_packman::types::{CellCode, Position, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_reference_dimensions_and_starts() {
    let layout = MazeLayout::reference();
    assert_eq!(layout.width(), GRID_WIDTH);
    assert_eq!(layout.height(), GRID_HEIGHT);
    assert_eq!(layout.avatar_start(), Position::new(1, 1));
    assert_eq!(layout.ghost_starts(), &REFERENCE_GHOST_STARTS[..]);

    let maze = Maze::from_layout(&layout);
    assert!(maze.is_passable_at(REFERENCE_AVATAR_START));
    for start in REFERENCE_GHOST_STARTS {
        assert!(maze.is_passable_at(start), "ghost start {:?} is a wall", start);
    }
}

#[test]
fn test_reference_border_is_solid() {
    let maze = Maze::from_layout(&MazeLayout::reference());
    let (w, h) = (GRID_WIDTH as i16, GRID_HEIGHT as i16);
    for x in 0..w {
        assert_eq!(maze.get(x, 0), Some(CellCode::Wall));
        assert_eq!(maze.get(x, h - 1), Some(CellCode::Wall));
    }
    for y in 0..h {
        assert_eq!(maze.get(0, y), Some(CellCode::Wall));
        assert_eq!(maze.get(w - 1, y), Some(CellCode::Wall));
    }
}

#[test]
fn test_pellet_consumed_once() {
    let mut maze = Maze::from_layout(&MazeLayout::reference());
    let before = maze.pellet_count();

    assert!(maze.consume_pellet(2, 1));
    assert!(!maze.consume_pellet(2, 1));
    assert_eq!(maze.get(2, 1), Some(CellCode::Empty));
    assert_eq!(maze.pellet_count(), before - 1);

    // Walls and empty cells are untouched.
    assert!(!maze.consume_pellet(0, 0));
    assert!(!maze.consume_pellet(8, 7));
    assert_eq!(maze.get(0, 0), Some(CellCode::Wall));
}

#[test]
fn test_restore_returns_initial_grid() {
    let layout = MazeLayout::reference();
    let mut maze = Maze::from_layout(&layout);
    for x in 1..9 {
        maze.consume_pellet(x, 1);
    }
    maze.restore(&layout);
    assert_eq!(maze.cells(), layout.cells());
}

#[test]
fn test_layout_rejects_bad_input() {
    assert!(matches!(
        MazeLayout::from_rows(&["###", "##"], Position::new(1, 1), vec![Position::new(1, 1)]),
        Err(LayoutError::RaggedRow { row: 1, .. })
    ));
    assert!(matches!(
        MazeLayout::from_rows(&["#?#"], Position::new(1, 0), vec![Position::new(1, 0)]),
        Err(LayoutError::UnknownGlyph { glyph: '?', .. })
    ));
    assert!(matches!(
        MazeLayout::from_rows(&["###", "#.#", "###"], Position::new(0, 0), vec![Position::new(1, 1)]),
        Err(LayoutError::BlockedStart { .. })
    ));
    assert!(matches!(
        MazeLayout::from_rows(&["###", "#.#", "###"], Position::new(1, 1), vec![]),
        Err(LayoutError::NoGhostStarts)
    ));

    // Too wide for i16 positions: an actor on the last column could not step right.
    let row = " ".repeat(32769);
    assert!(matches!(
        MazeLayout::from_rows(&[row.as_str()], Position::new(32767, 0), vec![Position::new(0, 0)]),
        Err(LayoutError::TooLarge { width: 32769, height: 1 })
    ));
}

proptest! {
    #[test]
    fn passable_iff_in_bounds_and_not_wall(x in -5i16..30, y in -5i16..25) {
        let layout = MazeLayout::reference();
        let maze = Maze::from_layout(&layout);

        let in_bounds = x >= 0 && y >= 0 && x < GRID_WIDTH as i16 && y < GRID_HEIGHT as i16;
        let expected = in_bounds && layout.cell(x, y) != Some(CellCode::Wall);
        prop_assert_eq!(maze.is_passable(x, y), expected);
        prop_assert_eq!(maze.get(x, y).is_some(), in_bounds);
    }
}
