//! Session runtime integration.
//!
//! Bridges the synchronous front end with an async tick loop: the session
//! lives in a tokio task, frames go out on a `watch` channel and control
//! commands come in on an `mpsc` channel. The front end only ever touches the
//! pending heading directly.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::core::{GameSnapshot, GameState, PendingHeading};
use crate::session::{FrameSink, Session};

/// Bounded so a key-mashing player cannot queue unbounded resets
const CONTROL_QUEUE: usize = 8;

/// Lifecycle command delivered to the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Reset,
    Shutdown,
}

/// Publishes frames into a watch channel, reusing the receiver-side buffer.
struct WatchSink {
    tx: watch::Sender<GameSnapshot>,
}

impl FrameSink for WatchSink {
    fn present(&mut self, frame: &GameSnapshot) {
        self.tx.send_modify(|slot| slot.clone_from(frame));
    }
}

/// Handle to a tick loop running on the current tokio runtime.
///
/// Dropping the handle aborts the loop.
pub struct SessionHandle {
    control_tx: mpsc::Sender<Control>,
    frames: watch::Receiver<GameSnapshot>,
    pending: PendingHeading,
    task: Option<JoinHandle<()>>,
}

/// Spawn the tick loop for `state` onto the current tokio runtime.
///
/// The session is started immediately: the first frame is published and the
/// first tick is scheduled one interval later.
pub fn spawn_session(state: GameState) -> SessionHandle {
    let (frame_tx, frames) = watch::channel(GameSnapshot::default());
    let (control_tx, control_rx) = mpsc::channel(CONTROL_QUEUE);
    let pending = PendingHeading::default();

    let session = Session::new(state, pending.clone(), WatchSink { tx: frame_tx });
    let task = tokio::spawn(drive(session, control_rx));

    SessionHandle {
        control_tx,
        frames,
        pending,
        task: Some(task),
    }
}

async fn drive(mut session: Session<WatchSink>, mut control_rx: mpsc::Receiver<Control>) {
    let origin = Instant::now();
    let now_ms = move || origin.elapsed().as_millis() as u64;

    session.start(now_ms());

    loop {
        let wait = session.time_until_due(now_ms());

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(wait.unwrap_or(0))), if wait.is_some() => {
                session.poll(now_ms());
            }
            cmd = control_rx.recv() => match cmd {
                // The pending sleep is dropped with this select arm, so no
                // tick from the old episode can run after the reset.
                Some(Control::Reset) => session.reset(now_ms()),
                Some(Control::Shutdown) | None => {
                    session.halt();
                    break;
                }
            },
        }
    }

    log::debug!("tick loop stopped");
}

impl SessionHandle {
    /// Shared heading cell for the input listener
    pub fn pending_heading(&self) -> PendingHeading {
        self.pending.clone()
    }

    /// New receiver for frames (the current frame counts as seen)
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        let mut rx = self.frames.clone();
        rx.borrow_and_update();
        rx
    }

    /// Copy of the latest published frame
    pub fn latest(&self) -> GameSnapshot {
        self.frames.borrow().clone()
    }

    /// Queue a reset without blocking. Returns false if the loop is gone or busy.
    pub fn request_reset(&self) -> bool {
        self.control_tx.try_send(Control::Reset).is_ok()
    }

    pub async fn reset(&self) -> Result<()> {
        self.control_tx
            .send(Control::Reset)
            .await
            .context("tick loop is not running")
    }

    /// Stop the loop and wait for it to finish.
    pub async fn shutdown(mut self) -> Result<()> {
        // An already-stopped loop has dropped its receiver; that is fine.
        let _ = self.control_tx.send(Control::Shutdown).await;
        if let Some(task) = self.task.take() {
            task.await.context("tick loop panicked")?;
        }
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Owns a dedicated tokio runtime running one session.
///
/// For synchronous callers such as the terminal front end.
pub struct SessionRuntime {
    rt: Runtime,
    handle: SessionHandle,
}

impl SessionRuntime {
    pub fn start(state: GameState) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("packman-tick")
            .enable_time()
            .build()
            .context("failed to build tick runtime")?;

        let handle = {
            let _guard = rt.enter();
            spawn_session(state)
        };
        log::info!("tick loop running");

        Ok(Self { rt, handle })
    }

    pub fn pending_heading(&self) -> PendingHeading {
        self.handle.pending_heading()
    }

    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.handle.subscribe()
    }

    pub fn request_reset(&self) -> bool {
        self.handle.request_reset()
    }

    /// Stop the tick loop, then the runtime.
    pub fn shutdown(self) -> Result<()> {
        let Self { rt, handle } = self;
        let result = rt.block_on(handle.shutdown());
        drop(rt);
        log::info!("tick loop shut down");
        result
    }
}
