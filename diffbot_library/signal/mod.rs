//! Signal conditioning between the encoder and the controller
//!
//! Measurements pass through a [`MovingAverageFilter`] to smooth encoder noise
//! and then a [`MeasurementDelay`] that models transport latency.

pub mod buffer;
pub mod delay;
pub mod moving_average;

pub use buffer::CircularBuffer;
pub use delay::{DelayPhase, MeasurementDelay};
pub use moving_average::MovingAverageFilter;
