use crate::config::PreloaderConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Counting,
    Loaded,
    Fading,
    Hidden,
}

/// Percentage counter shown while the page loads, then faded out.
///
/// The counter runs on its own timer; the page `load` event may arrive at
/// any point and jumps straight to 100%.
#[derive(Clone, Debug)]
pub struct Preloader {
    count: u32,
    steps: u32,
    interval_ms: u32,
    fade_delay_ms: u32,
    hide_delay_ms: u32,
    phase: PreloaderPhase,
}

impl Preloader {
    pub fn new(config: &PreloaderConfig) -> Self {
        Self {
            count: 1,
            steps: config.steps.max(1),
            interval_ms: config.step_interval_ms(),
            fade_delay_ms: config.fade_delay_ms,
            hide_delay_ms: config.hide_delay_ms,
            phase: PreloaderPhase::Counting,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn phase(&self) -> PreloaderPhase {
        self.phase
    }

    pub fn percent_text(&self) -> String {
        format!("{}%", self.count)
    }

    /// Advances the counter; returns the delay before the next step, or
    /// `None` once 100% has been reached.
    pub fn step(&mut self) -> Option<u32> {
        if self.count < self.steps {
            self.count += 1;
            Some(self.interval_ms)
        } else {
            None
        }
    }

    /// Page finished loading: force 100% and return the delay before fading.
    pub fn finish_loading(&mut self) -> u32 {
        self.count = self.steps;
        if self.phase == PreloaderPhase::Counting {
            self.phase = PreloaderPhase::Loaded;
        }
        self.fade_delay_ms
    }

    /// Opacity goes to zero; returns the delay before the element is removed.
    pub fn begin_fade(&mut self) -> Option<u32> {
        if self.phase != PreloaderPhase::Loaded {
            return None;
        }
        self.phase = PreloaderPhase::Fading;
        Some(self.hide_delay_ms)
    }

    pub fn hide(&mut self) -> bool {
        if self.phase != PreloaderPhase::Fading {
            return false;
        }
        self.phase = PreloaderPhase::Hidden;
        true
    }

    pub fn preloader_visible(&self) -> bool {
        self.phase != PreloaderPhase::Hidden
    }

    pub fn content_visible(&self) -> bool {
        self.phase == PreloaderPhase::Hidden
    }
}
