use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Source of the elapsed time between ticks.
pub trait Clock {
    /// Time since the previous call (or since construction for the first).
    fn elapsed(&mut self) -> Duration;
}

/// Wall-clock time.
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt
    }
}

/// Scripted time: queued intervals first, then `fallback` forever.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    queued: VecDeque<Duration>,
    fallback: Duration,
}

impl ManualClock {
    pub fn new(fallback: Duration) -> Self {
        Self { queued: VecDeque::new(), fallback }
    }

    pub fn with_steps(steps: impl IntoIterator<Item = Duration>, fallback: Duration) -> Self {
        Self { queued: steps.into_iter().collect(), fallback }
    }
}

impl Clock for ManualClock {
    fn elapsed(&mut self) -> Duration {
        self.queued.pop_front().unwrap_or(self.fallback)
    }
}
