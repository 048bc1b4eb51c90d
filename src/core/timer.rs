//! Deadline-based timers polled from the UI loop.
//!
//! Nothing here runs on its own thread. The owner keeps the handle and asks it
//! whether it has fired on every frame; dropping or replacing the handle is the
//! cancellation.

use std::time::{
    Duration,
    Instant,
};

/// A one-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    deadline: Instant,
}

impl Timeout {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self { deadline: now + delay }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// A fixed-period interval counting whole periods since it was started.
#[derive(Debug, Clone)]
pub struct Ticker {
    started: Instant,
    period: Duration,
    ticks: u64,
    running: bool,
}

impl Ticker {
    pub fn start(now: Instant, period: Duration) -> Self {
        Self { started: now, period, ticks: 0, running: true }
    }

    /// Advances the ticker to `now` and returns how many ticks fired since the
    /// previous poll. A stopped ticker never fires again.
    pub fn poll(&mut self, now: Instant) -> u64 {
        if !self.running || self.period.is_zero() {
            return 0;
        }

        let elapsed = now.saturating_duration_since(self.started).as_nanos();
        let total = (elapsed / self.period.as_nanos()) as u64;
        let fired = total.saturating_sub(self.ticks);
        self.ticks = self.ticks.max(total);
        fired
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn next_tick(&self) -> Option<Instant> {
        if !self.running {
            return None;
        }
        let next = u32::try_from(self.ticks + 1).unwrap_or(u32::MAX);
        Some(self.started + self.period * next)
    }
}

/// The earlier of two optional deadlines.
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_fires_at_deadline() {
        let now = Instant::now();
        let timeout = Timeout::after(now, Duration::from_secs(1));

        assert!(!timeout.is_due(now));
        assert!(!timeout.is_due(now + Duration::from_millis(999)));
        assert!(timeout.is_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn ticker_counts_whole_periods() {
        let now = Instant::now();
        let mut ticker = Ticker::start(now, Duration::from_secs(1));

        assert_eq!(ticker.poll(now + Duration::from_millis(500)), 0);
        assert_eq!(ticker.poll(now + Duration::from_millis(1500)), 1);
        assert_eq!(ticker.poll(now + Duration::from_millis(4200)), 3);
        assert_eq!(ticker.ticks(), 4);
        assert_eq!(ticker.next_tick(), Some(now + Duration::from_secs(5)));

        ticker.stop();
        assert_eq!(ticker.poll(now + Duration::from_secs(60)), 0);
        assert_eq!(ticker.ticks(), 4);
        assert_eq!(ticker.next_tick(), None);
    }

    #[test]
    fn earliest_picks_the_sooner_deadline() {
        let now = Instant::now();
        let later = now + Duration::from_secs(2);

        assert_eq!(earliest(Some(later), Some(now)), Some(now));
        assert_eq!(earliest(None, Some(later)), Some(later));
        assert_eq!(earliest(None, None), None);
    }
}
