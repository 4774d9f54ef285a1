use std::time::{Duration, Instant};

/// A single countdown for the whole game. When it runs out the game ends.
#[derive(Clone, Debug, Default)]
pub struct GameClock {
    limit: Option<Duration>,
    started: Option<Instant>,
    stopped_at: Option<Duration>,
}

impl GameClock {
    /// A clock that starts counting down immediately. `None` never expires.
    pub fn new(limit: Option<Duration>) -> Self {
        let mut clock = Self::default();
        if let Some(limit) = limit {
            clock.start(limit);
        }
        clock
    }

    pub fn start(&mut self, limit: Duration) {
        self.limit = Some(limit);
        self.started = Some(Instant::now());
        self.stopped_at = None;
    }

    /// Freezes the time left. Does nothing if the clock is already stopped.
    pub fn stop(&mut self) {
        if self.stopped_at.is_none() {
            self.stopped_at = self.remaining();
        }
    }

    /// Continues counting down from where `stop` froze the clock.
    pub fn resume(&mut self) {
        if let (Some(limit), Some(frozen)) = (self.limit, self.stopped_at.take()) {
            let elapsed = limit.saturating_sub(frozen);
            self.started = Instant::now().checked_sub(elapsed).or(self.started);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Time left, or `None` for an unlimited clock.
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.limit?;
        if let Some(frozen) = self.stopped_at {
            return Some(frozen);
        }
        let elapsed = self.started.map_or(Duration::ZERO, |started| started.elapsed());
        Some(limit.saturating_sub(elapsed))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining() == Some(Duration::ZERO)
    }
}

/// Formats a duration as `m:ss`.
pub fn format_remaining(remaining: Duration) -> String {
    let seconds = remaining.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
