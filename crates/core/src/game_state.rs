//! Game state module - manages the complete session state
//!
//! This module ties together the maze, the avatar, the ghosts, the RNG and
//! the score. One call to [`GameState::tick`] runs the whole update cycle:
//! move avatar, move ghosts, detect collision, detect win.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::layout::MazeLayout;
use crate::maze::Maze;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, GhostSnapshot};
use crate::types::*;

/// The player-controlled actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pub position: Position,
    /// Committed heading, applied on the next tick
    pub heading: Heading,
}

impl Avatar {
    /// Advance one cell along the heading unless blocked.
    ///
    /// A blocked move is skipped; the heading is kept.
    pub fn advance(&mut self, maze: &Maze) -> bool {
        let candidate = self.position.step(self.heading);
        if !maze.is_passable_at(candidate) {
            return false;
        }
        self.position = candidate;
        true
    }
}

/// A randomly wandering adversary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub position: Position,
    pub heading: Heading,
    pub color: GhostColor,
}

impl Ghost {
    /// One wander step. Returns true if the ghost moved.
    ///
    /// The ghost turns when the cell ahead is blocked, or with probability
    /// `redirect_percent` on an open path. After turning it re-checks once:
    /// if the new cell ahead is blocked too it stays put but keeps the new
    /// heading.
    pub fn wander(&mut self, maze: &Maze, rng: &mut SimpleRng, redirect_percent: u32) -> bool {
        let mut candidate = self.position.step(self.heading);

        // The redirect draw is only made when the path ahead is open.
        if !maze.is_passable_at(candidate) || rng.chance(redirect_percent) {
            self.heading = rng.next_heading();
            candidate = self.position.step(self.heading);
            if !maze.is_passable_at(candidate) {
                return false;
            }
        }

        self.position = candidate;
        true
    }
}

/// What one tick changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    /// False when the tick was skipped (not started or not running)
    pub advanced: bool,
    pub avatar_moved: bool,
    pub pellet_eaten: bool,
    pub status: SessionStatus,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    layout: MazeLayout,
    config: GameConfig,
    maze: Maze,
    avatar: Avatar,
    ghosts: ArrayVec<Ghost, MAX_GHOSTS>,
    rng: SimpleRng,
    score: u32,
    status: SessionStatus,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Ticks evaluated in the current episode.
    tick: u32,
    started: bool,
}

impl GameState {
    /// Create a session on `layout`. Call [`start`](Self::start) before ticking.
    pub fn new(layout: MazeLayout, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(layout, config))
    }

    /// Session on the reference maze with default tunables and the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self::build(MazeLayout::reference(), GameConfig::default().with_seed(seed))
    }

    fn build(layout: MazeLayout, config: GameConfig) -> Self {
        let mut state = Self {
            maze: Maze::from_layout(&layout),
            avatar: Avatar {
                position: layout.avatar_start(),
                heading: Heading::Right,
            },
            rng: SimpleRng::new(config.seed),
            layout,
            config,
            ghosts: ArrayVec::new(),
            score: 0,
            status: SessionStatus::Running,
            episode_id: 0,
            tick: 0,
            started: false,
        };
        state.initialize();
        state
    }

    /// Mount the session: runs the full lifecycle routine and enables ticking.
    pub fn start(&mut self) {
        self.initialize();
        self.started = true;
        log::info!(
            "episode {} started: {}x{} maze, {} ghosts, seed {}",
            self.episode_id,
            self.maze.width(),
            self.maze.height(),
            self.ghosts.len(),
            self.config.seed
        );
    }

    /// Restore initial conditions. Same work as [`start`](Self::start).
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.initialize();
        self.started = true;
        log::info!("episode {} reset", self.episode_id);
    }

    fn initialize(&mut self) {
        self.maze.restore(&self.layout);
        self.avatar = Avatar {
            position: self.layout.avatar_start(),
            heading: Heading::Right,
        };

        self.ghosts.clear();
        for i in 0..self.config.ghost_count.min(MAX_GHOSTS) {
            self.ghosts.push(Ghost {
                position: self.layout.ghost_start(i),
                heading: self.rng.next_heading(),
                color: GhostColor::for_index(i),
            });
        }

        self.score = 0;
        self.status = SessionStatus::Running;
        self.tick = 0;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn avatar(&self) -> Avatar {
        self.avatar
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Direct access for scripted scenarios (tests, demos).
    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    /// Direct access for scripted scenarios (tests, demos).
    pub fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    /// Commit a heading for the next avatar step
    pub fn set_heading(&mut self, heading: Heading) {
        self.avatar.heading = heading;
    }

    /// Run one update cycle: avatar, ghosts, collision, win.
    ///
    /// A no-op unless the session is started and running.
    pub fn tick(&mut self) -> TickEvents {
        if !self.started || !self.status.is_running() {
            return TickEvents {
                status: self.status,
                ..TickEvents::default()
            };
        }

        self.tick = self.tick.wrapping_add(1);

        let (avatar_moved, pellet_eaten) = self.move_avatar();
        self.move_ghosts();

        // Collision is checked first; a loss on the same tick as the last
        // pellet stays a loss.
        if self.check_collision() {
            self.status = SessionStatus::Lost;
            log::info!(
                "episode {} lost at tick {} (score {})",
                self.episode_id,
                self.tick,
                self.score
            );
        } else if !self.maze.has_remaining_pellets() {
            self.status = SessionStatus::Won;
            log::info!(
                "episode {} won at tick {} (score {})",
                self.episode_id,
                self.tick,
                self.score
            );
        }

        log::trace!(
            "tick {}: avatar {:?} {:?}, score {}",
            self.tick,
            self.avatar.position,
            self.avatar.heading,
            self.score
        );

        TickEvents {
            advanced: true,
            avatar_moved,
            pellet_eaten,
            status: self.status,
        }
    }

    /// Tick and return the resulting frame.
    pub fn step(&mut self) -> GameSnapshot {
        self.tick();
        self.snapshot()
    }

    fn move_avatar(&mut self) -> (bool, bool) {
        if !self.avatar.advance(&self.maze) {
            return (false, false);
        }
        let p = self.avatar.position;
        let eaten = self.maze.consume_pellet(p.x, p.y);
        if eaten {
            self.score = self.score.saturating_add(self.config.pellet_reward);
        }
        (true, eaten)
    }

    fn move_ghosts(&mut self) {
        let percent = self.config.redirect_percent;
        for ghost in self.ghosts.iter_mut() {
            ghost.wander(&self.maze, &mut self.rng, percent);
        }
    }

    /// Is any ghost on the avatar's cell?
    pub fn check_collision(&self) -> bool {
        self.ghosts.iter().any(|g| g.position == self.avatar.position)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Steer(heading) => {
                self.set_heading(heading);
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.maze.width();
        out.height = self.maze.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.maze.cells());
        out.avatar = self.avatar.position;
        out.heading = self.avatar.heading;
        out.ghosts.clear();
        out.ghosts.extend(self.ghosts.iter().map(GhostSnapshot::from));
        out.score = self.score;
        out.status = self.status;
        out.pellets_remaining = self.maze.pellet_count();
        out.episode_id = self.episode_id;
        out.tick = self.tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
