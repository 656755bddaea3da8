use std::time::{Duration, Instant};

/// One-shot countdown that paces automatic advancement.
///
/// The countdown is a monotonic deadline rather than an OS interval timer:
/// the event source bounds its wait by [`Countdown::remaining`] and reports
/// expiry when the bound runs out.
#[derive(Debug, Default)]
pub struct Countdown {
    deadline: Option<Instant>,
}

impl Countdown {
    pub fn disarmed() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown.
    pub fn arm(&mut self, interval: Duration) {
        self.deadline = Instant::now().checked_add(interval);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Time left before expiry; zero once expired, `None` when disarmed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
