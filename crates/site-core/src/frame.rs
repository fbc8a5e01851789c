use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared stop flag for the render loop. Cloning shares the flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub index: u64,
    pub elapsed_secs: f32,
}

/// Clock and counter for the once-per-display-refresh render callback.
///
/// The loop has a single running state; the only exit is cancellation, after
/// which `tick` keeps returning `None`.
#[derive(Debug)]
pub struct RenderLoop {
    start: Instant,
    ticks: u64,
    last_elapsed: f32,
    token: CancelToken,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            ticks: 0,
            last_elapsed: 0.0,
            token: CancelToken::new(),
        }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) -> Option<FrameTick> {
        self.tick_at(Instant::now())
    }

    /// Elapsed time never goes backwards even if `now` does.
    pub fn tick_at(&mut self, now: Instant) -> Option<FrameTick> {
        if self.token.is_cancelled() {
            return None;
        }
        let since_start = if now > self.start {
            now.duration_since(self.start)
        } else {
            Duration::ZERO
        };
        let elapsed = since_start.as_secs_f32().max(self.last_elapsed);
        self.last_elapsed = elapsed;
        let tick = FrameTick {
            index: self.ticks,
            elapsed_secs: elapsed,
        };
        self.ticks += 1;
        Some(tick)
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}
