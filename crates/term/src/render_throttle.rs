/// Skips redraws of frames that have not changed.
///
/// A new fingerprint always renders. An unchanged one is redrawn at most once
/// per `min_static_interval_ms`, so an idle game-over screen still repaints
/// now and then (e.g. after something else scribbled on the terminal).
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to render the frame with `fingerprint` at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let render = match self.last {
            None => true,
            Some((_, fp)) if fp != fingerprint => true,
            Some((at, _)) => now_ms.saturating_sub(at) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Make the next call render regardless of fingerprint.
    pub fn force(&mut self) {
        self.last = None;
    }
}
