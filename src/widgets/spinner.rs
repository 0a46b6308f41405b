use std::time::{Duration, Instant};

/// A frame-based spinner animation.
///
/// Call [`Spinner::tick`] to advance and [`Spinner::frame`] to get the
/// current glyph. See [`SpinnerClock`] for a spinner paced by elapsed time.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    index: usize,
}

impl Spinner {
    /// Braille dot spinner.
    pub fn dots() -> Self {
        Self {
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            index: 0,
        }
    }

    /// Advance to the next frame.
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }

    /// Current frame string.
    pub fn frame(&self) -> &'static str {
        self.frames[self.index]
    }

    /// Position of the current frame in the rotation.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::dots()
    }
}

impl std::fmt::Display for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.frame())
    }
}

/// A [`Spinner`] that advances at most once per `interval`.
///
/// There is no background timer: the clock is checked whenever a frame is
/// requested, so animation speed follows how often the caller renders,
/// capped at one step per interval. The first request always advances.
#[derive(Debug, Clone)]
pub struct SpinnerClock {
    spinner: Spinner,
    interval: Duration,
    last_tick: Option<Instant>,
}

impl SpinnerClock {
    pub fn new(spinner: Spinner, interval: Duration) -> Self {
        Self {
            spinner,
            interval,
            last_tick: None,
        }
    }

    /// Returns the frame to show at `now`, ticking first if the interval
    /// has elapsed since the last tick.
    pub fn frame_at(&mut self, now: Instant) -> &'static str {
        let due = self
            .last_tick
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due {
            self.spinner.tick();
            self.last_tick = Some(now);
        }
        self.spinner.frame()
    }
}
