//! Session: drives a [`GameState`] at a fixed interval and publishes frames.
//!
//! The driver is clock-agnostic: callers pass the current time in
//! milliseconds. The next deadline is computed only after a step completes
//! (self-rescheduling), and nothing is scheduled once the session leaves
//! `Running`.

use crate::core::{GameSnapshot, GameState, PendingHeading};
use crate::types::Heading;

/// Receives every frame the session produces
pub trait FrameSink {
    fn present(&mut self, frame: &GameSnapshot);
}

impl<F> FrameSink for F
where
    F: FnMut(&GameSnapshot),
{
    fn present(&mut self, frame: &GameSnapshot) {
        self(frame)
    }
}

pub struct Session<S: FrameSink> {
    state: GameState,
    pending: PendingHeading,
    sink: S,
    /// Reused frame buffer
    frame: GameSnapshot,
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl<S: FrameSink> Session<S> {
    pub fn new(state: GameState, pending: PendingHeading, sink: S) -> Self {
        let interval_ms = state.config().tick_ms as u64;
        Self {
            state,
            pending,
            sink,
            frame: GameSnapshot::default(),
            interval_ms,
            next_due_ms: None,
        }
    }

    /// Mount: initialise the game, publish the first frame, schedule the first tick.
    pub fn start(&mut self, now_ms: u64) {
        self.pending.set(Heading::Right);
        self.state.start();
        self.present();
        self.schedule(now_ms);
    }

    /// Halt scheduling, reinitialise, publish, then reschedule.
    pub fn reset(&mut self, now_ms: u64) {
        self.halt();
        self.pending.set(Heading::Right);
        self.state.reset();
        self.present();
        self.schedule(now_ms);
    }

    /// Stop scheduling ticks. Used on teardown.
    pub fn halt(&mut self) {
        self.next_due_ms = None;
    }

    /// Run a step if one is due. Returns true when a step ran.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {}
            _ => return false,
        }

        self.next_due_ms = None;
        self.step();
        if self.state.status().is_running() {
            self.schedule(now_ms);
        } else {
            log::debug!(
                "session {} stopped ticking: {}",
                self.state.episode_id(),
                self.state.status().as_str()
            );
        }
        true
    }

    /// Commit the pending heading, tick once and publish the frame.
    ///
    /// Does nothing once the session has ended.
    pub fn step(&mut self) -> &GameSnapshot {
        if self.state.started() && self.state.status().is_running() {
            // Read once per tick: later writes land on the next tick.
            self.state.set_heading(self.pending.load());
            self.state.tick();
            self.present();
        }
        &self.frame
    }

    /// Milliseconds until the next tick, `None` when nothing is scheduled
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }

    pub fn is_scheduled(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn pending_heading(&self) -> PendingHeading {
        self.pending.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> &GameSnapshot {
        &self.frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn schedule(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    fn present(&mut self) {
        self.state.snapshot_into(&mut self.frame);
        self.sink.present(&self.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, MazeLayout};
    use crate::types::{Position, SessionStatus};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<GameSnapshot>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, frame: &GameSnapshot) {
            self.frames.push(frame.clone());
        }
    }

    fn corridor_session() -> Session<Recorder> {
        let layout = MazeLayout::from_rows(
            &["#######", "#.....#", "#.....#", "#######"],
            Position::new(1, 1),
            vec![Position::new(5, 2)],
        )
        .unwrap();
        let state = GameState::new(layout, GameConfig::default().with_ghost_count(0)).unwrap();
        Session::new(state, PendingHeading::default(), Recorder::default())
    }

    #[test]
    fn test_start_publishes_and_schedules() {
        let mut session = corridor_session();
        assert!(!session.is_scheduled());

        session.start(0);
        assert_eq!(session.sink().frames.len(), 1);
        assert_eq!(session.time_until_due(0), Some(200));
        assert_eq!(session.time_until_due(150), Some(50));
    }

    #[test]
    fn test_poll_respects_interval() {
        let mut session = corridor_session();
        session.start(0);

        assert!(!session.poll(199));
        assert!(session.poll(200));
        assert_eq!(session.frame().tick, 1);

        // Rescheduled from completion time.
        assert!(!session.poll(399));
        assert!(session.poll(400));
        assert_eq!(session.frame().tick, 2);
        assert_eq!(session.sink().frames.len(), 3);
    }

    #[test]
    fn test_late_poll_runs_single_step() {
        let mut session = corridor_session();
        session.start(0);
        assert!(session.poll(1000));
        assert_eq!(session.frame().tick, 1);
        assert_eq!(session.time_until_due(1000), Some(200));
    }

    #[test]
    fn test_pending_heading_read_at_step() {
        let mut session = corridor_session();
        let input = session.pending_heading();
        session.start(0);

        input.set(Heading::Up);
        input.set(Heading::Down);
        session.step();
        assert_eq!(session.frame().avatar, Position::new(1, 2));
        assert_eq!(session.frame().heading, Heading::Down);
    }

    #[test]
    fn test_reset_halts_and_restores() {
        let mut session = corridor_session();
        let input = session.pending_heading();
        session.start(0);
        session.poll(200);
        session.poll(400);
        input.set(Heading::Down);

        session.reset(450);
        let frame = session.frame();
        assert_eq!(frame.episode_id, 1);
        assert_eq!(frame.tick, 0);
        assert_eq!(frame.score, 0);
        assert_eq!(frame.avatar, Position::new(1, 1));
        assert_eq!(input.load(), Heading::Right);
        assert_eq!(session.time_until_due(450), Some(200));
        assert!(!session.poll(600));
    }

    #[test]
    fn test_terminal_status_stops_scheduling() {
        let layout = MazeLayout::from_rows(
            &["####", "# .#", "####"],
            Position::new(1, 1),
            vec![Position::new(1, 1)],
        )
        .unwrap();
        let state = GameState::new(layout, GameConfig::default().with_ghost_count(0)).unwrap();
        let mut session = Session::new(state, PendingHeading::default(), Recorder::default());
        session.start(0);

        assert!(session.poll(200));
        assert_eq!(session.frame().status, SessionStatus::Won);
        assert!(!session.is_scheduled());
        assert!(!session.poll(10_000));

        let published = session.sink().frames.len();
        session.step();
        assert_eq!(session.sink().frames.len(), published);
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        {
            let state = GameState::with_seed(4);
            let mut session = Session::new(state, PendingHeading::default(), |_: &GameSnapshot| {
                count += 1
            });
            session.start(0);
            session.poll(200);
            session.halt();
            assert!(!session.poll(400));
        }
        assert_eq!(count, 2);
    }
}
