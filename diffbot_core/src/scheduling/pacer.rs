//! Pacers decide how long to wait before the next tick starts

use std::time::{Duration, Instant};

/// Hook called before every tick with the nominal tick period
pub trait Pacer {
    fn pace(&mut self, period: Duration);
}

/// Run ticks back to back, as fast as the host allows
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn pace(&mut self, _period: Duration) {}
}

/// Sleep so that ticks start one period apart in wall-clock time
///
/// Deadlines are absolute, so time spent computing a tick is absorbed
/// instead of accumulating as drift. When a tick overruns its deadline the
/// next one starts immediately and the schedule is re-anchored to now.
#[derive(Debug, Clone, Default)]
pub struct RealTimePacer {
    next_deadline: Option<Instant>,
    overruns: u64,
}

impl RealTimePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks that started late
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

impl Pacer for RealTimePacer {
    fn pace(&mut self, period: Duration) {
        let now = Instant::now();

        let Some(deadline) = self.next_deadline else {
            // First tick starts right away
            self.next_deadline = Some(now + period);
            return;
        };

        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + period);
        } else {
            self.overruns += 1;
            tracing::trace!(late_by = ?(now - deadline), "tick overran its deadline");
            self.next_deadline = Some(now + period);
        }
    }
}
