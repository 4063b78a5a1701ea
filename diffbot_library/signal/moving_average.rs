//! Moving-average smoothing of a scalar signal

use super::buffer::CircularBuffer;
use diffbot_core::error::ensure_capacity;
use diffbot_core::DiffbotResult;

/// Arithmetic mean over the most recent `window_size` samples
///
/// Before the window has filled, the mean is taken over however many samples
/// have been seen, so the output tracks the input from the first sample on.
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    window: CircularBuffer<f64>,
}

impl MovingAverageFilter {
    pub fn new(window_size: usize) -> DiffbotResult<Self> {
        ensure_capacity("window_size", window_size)?;
        Ok(Self {
            window: CircularBuffer::new(window_size),
        })
    }

    /// Push a sample and return the mean of the samples currently held
    pub fn filter(&mut self, value: f64) -> f64 {
        self.window.push(value);
        self.window.iter().sum::<f64>() / self.window.len() as f64
    }

    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// True once `window_size` samples have been seen
    pub fn is_warm(&self) -> bool {
        self.window.is_full()
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}
