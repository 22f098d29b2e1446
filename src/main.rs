//! Terminal maze runner (default binary).
//!
//! The game ticks on a background runtime; this thread owns the terminal,
//! reads keys and redraws whenever a new frame is published.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};

use tui_packman::cli::{clock_seed, parse_args, USAGE};
use tui_packman::core::{GameConfig, GameSnapshot, GameState, MazeLayout};
use tui_packman::engine::SessionRuntime;
use tui_packman::input::{InputListener, ListenerCommand};
use tui_packman::logging;
use tui_packman::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

/// Upper bound on how long a key press waits before the frame check.
const INPUT_POLL_MS: u64 = 16;
/// Repaint an unchanged screen at most this often.
const STATIC_REDRAW_MS: u64 = 1000;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        print!("{}", USAGE);
        return Ok(());
    }

    logging::init(logging::resolve_log_path(cli.log_path.as_deref()).as_deref())?;

    let config = cli.launch_config(GameConfig::from_env(), GameConfig::env_seed(), clock_seed);
    let state = GameState::new(MazeLayout::reference(), config).context("invalid configuration")?;
    let runtime = SessionRuntime::start(state)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &runtime));

    // Always try to restore terminal state.
    let _ = term.exit();
    let stopped = runtime.shutdown();
    result.and(stopped)
}

fn run(term: &mut TerminalRenderer, runtime: &SessionRuntime) -> Result<()> {
    let listener = InputListener::new(runtime.pending_heading());
    let mut frames = runtime.subscribe();
    let mut snap = GameSnapshot::default();
    snap.clone_from(&frames.borrow());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let origin = Instant::now();
    let mut viewport = current_viewport();

    loop {
        match frames.has_changed() {
            Ok(true) => snap.clone_from(&frames.borrow_and_update()),
            Ok(false) => {}
            Err(_) => bail!("tick loop stopped unexpectedly"),
        }

        // A resize must count as a change even when the game is idle.
        let size_bits = (viewport.width as u64) << 48 | (viewport.height as u64) << 32;
        let fingerprint = snap.fingerprint() ^ size_bits;
        if throttle.should_render(origin.elapsed().as_millis() as u64, fingerprint) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match listener.handle_key(key) {
                Some(ListenerCommand::Quit) => {
                    log::info!("quit requested");
                    return Ok(());
                }
                Some(ListenerCommand::Reset) => {
                    if !runtime.request_reset() {
                        log::warn!("reset dropped: control queue full");
                    }
                }
                None => {}
            },
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
                throttle.force();
            }
            _ => {}
        }
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
