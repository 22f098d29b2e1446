use tui_packman::core::{GameSnapshot, GameState};
use tui_packman::term::game_view::ghost_rgb;
use tui_packman::term::{FrameBuffer, GameView, Viewport};
use tui_packman::types::{GhostColor, Position, SessionStatus};

// Reference maze at 2x1: 40x15 cells inside a border => 42x17.
const FRAME_W: u16 = 42;
const FRAME_H: u16 = 17;

fn started() -> GameSnapshot {
    let mut gs = GameState::with_seed(1);
    gs.start();
    gs.snapshot()
}

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).unwrap().ch
}

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&started(), Viewport::new(FRAME_W, FRAME_H));

    assert_eq!(ch(&fb, 0, 0), '╔');
    assert_eq!(ch(&fb, FRAME_W - 1, 0), '╗');
    assert_eq!(ch(&fb, 0, FRAME_H - 1), '╚');
    assert_eq!(ch(&fb, FRAME_W - 1, FRAME_H - 1), '╝');
}

#[test]
fn term_view_renders_wall_two_chars_wide() {
    let fb = GameView::default().render(&started(), Viewport::new(FRAME_W, FRAME_H));

    // Maze cell (0, 0) is a wall at terminal (1, 1)..(2, 1).
    assert_eq!(ch(&fb, 1, 1), '█');
    assert_eq!(ch(&fb, 2, 1), '█');
}

#[test]
fn term_view_draws_avatar_pellets_and_ghosts() {
    let snap = started();
    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H));

    // Cell (x, y) maps to columns 1 + 2x and 2 + 2x on row 1 + y; the glyph
    // sits in the second column.
    assert_eq!(ch(&fb, 4, 2), '●');
    assert_eq!(ch(&fb, 6, 2), '·');

    for ghost in snap.ghosts.iter() {
        let x = 2 + 2 * ghost.position.x as u16;
        let y = 1 + ghost.position.y as u16;
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '■');
        assert_eq!(cell.style.fg, ghost_rgb(ghost.color));
    }
}

#[test]
fn term_view_follows_avatar() {
    let mut gs = GameState::with_seed(1);
    gs.start();
    let snap = gs.step();
    assert_eq!(snap.avatar, Position::new(2, 1));

    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H));
    // The start cell keeps its pellet until the avatar walks back over it.
    assert_eq!(ch(&fb, 4, 2), '·');
    assert_eq!(ch(&fb, 6, 2), '●');
    assert_eq!(ch(&fb, 5, 2), ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = started();
    snap.score = 1230;
    let fb = GameView::default().render(&snap, Viewport::new(70, 20));

    let rows: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    let all = rows.join("\n");
    assert!(all.contains("SCORE"));
    assert!(all.contains("1230"));
    assert!(all.contains("PELLETS"));
    assert!(all.contains("RUNNING"));
    assert!(all.contains("r restart"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let fb = GameView::default().render(&started(), Viewport::new(FRAME_W, FRAME_H));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(!all.contains("SCORE"));
}

#[test]
fn term_view_overlays_terminal_status() {
    let mut snap = started();
    let view = GameView::default();
    let vp = Viewport::new(FRAME_W, FRAME_H);
    let mid = FRAME_H / 2;

    snap.status = SessionStatus::Lost;
    let fb = view.render(&snap, vp);
    assert!(fb.row_text(mid).contains("GAME OVER"));
    assert!(fb.row_text(mid + 1).contains("press R to restart"));

    snap.status = SessionStatus::Won;
    let fb = view.render(&snap, vp);
    assert!(fb.row_text(mid).contains("YOU WIN"));

    snap.status = SessionStatus::Running;
    let fb = view.render(&snap, vp);
    assert!(!fb.row_text(mid).contains("GAME OVER"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = started();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);

    view.render_into(&snap, Viewport::new(FRAME_W, FRAME_H), &mut fb);
    assert_eq!((fb.width(), fb.height()), (FRAME_W, FRAME_H));
    assert_eq!(fb, view.render(&snap, Viewport::new(FRAME_W, FRAME_H)));
}

#[test]
fn ghost_colors_are_distinct() {
    let colors: Vec<_> = GhostColor::PALETTE.iter().map(|&c| ghost_rgb(c)).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
