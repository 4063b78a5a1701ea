//! Fixed-latency measurement delay

use diffbot_core::error::ensure_capacity;
use diffbot_core::DiffbotResult;
use std::collections::VecDeque;

/// Whether the delay line has filled up yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPhase {
    /// Fewer than `delay_steps` samples queued; output holds the first sample
    Filling,
    /// Queue at capacity; output is the input from `delay_steps` ticks ago
    Full,
}

/// FIFO that replays its input a fixed number of ticks later
///
/// While filling, [`apply`](Self::apply) queues the sample and peeks at the
/// oldest one without removing it, so every call returns the first value ever
/// pushed. Once `delay_steps` samples are queued, each call dequeues the
/// oldest before queueing the new one, and the output at tick `t` is the
/// input from tick `t - delay_steps`.
#[derive(Debug, Clone)]
pub struct MeasurementDelay {
    queue: VecDeque<f64>,
    delay_steps: usize,
}

impl MeasurementDelay {
    pub fn new(delay_steps: usize) -> DiffbotResult<Self> {
        ensure_capacity("delay_steps", delay_steps)?;
        Ok(Self {
            queue: VecDeque::with_capacity(delay_steps),
            delay_steps,
        })
    }

    /// Queue `value` and return the delayed sample for this tick
    pub fn apply(&mut self, value: f64) -> f64 {
        if self.queue.len() < self.delay_steps {
            // Filling: hold the oldest sample in place
            self.queue.push_back(value);
            self.queue.front().copied().unwrap_or(value)
        } else {
            let delayed = self.queue.pop_front().unwrap_or(value);
            self.queue.push_back(value);
            delayed
        }
    }

    /// Phase the next call to [`apply`](Self::apply) runs in
    pub fn phase(&self) -> DelayPhase {
        if self.queue.len() < self.delay_steps {
            DelayPhase::Filling
        } else {
            DelayPhase::Full
        }
    }

    pub fn delay_steps(&self) -> usize {
        self.delay_steps
    }

    /// Number of samples currently queued
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn reset(&mut self) {
        self.queue.clear();
    }
}
