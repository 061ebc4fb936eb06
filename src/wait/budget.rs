// ABOUTME: Wall-clock allowance shared by the search and status phases.
// ABOUTME: Started once; both phases only ever read it.

use std::time::Duration;
use tokio::time::Instant;

/// Fixed start instant plus the total allowed duration.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,
    total: Duration,
}

impl TimeBudget {
    /// Start the clock now.
    pub fn start(total: Duration) -> Self {
        Self {
            start: Instant::now(),
            total,
        }
    }

    /// Whether time is left. Checked before every request.
    pub fn remaining(&self) -> bool {
        self.start.elapsed() < self.total
    }

    pub fn total(&self) -> Duration {
        self.total
    }
}
