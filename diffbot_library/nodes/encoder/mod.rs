//! Simulated wheel encoder
//!
//! The encoder reports the motor's true speed plus zero-mean Gaussian noise.
//! The random source is a type parameter so tests and replays can supply
//! their own.

pub mod noise;

pub use noise::{GaussianNoise, NoiseSource, ZeroNoise};

use diffbot_core::error::ensure_non_negative;
use diffbot_core::DiffbotResult;

/// Encoder - noisy measurement of wheel speed
#[derive(Debug, Clone)]
pub struct Encoder<N> {
    noise_std_dev: f64, // RPM
    source: N,
}

impl<N: NoiseSource> Encoder<N> {
    pub fn new(noise_std_dev: f64, source: N) -> DiffbotResult<Self> {
        ensure_non_negative("noise_std_dev", noise_std_dev)?;
        Ok(Self {
            noise_std_dev,
            source,
        })
    }

    /// Read the encoder for the given true speed
    pub fn read(&mut self, true_speed: f64) -> f64 {
        true_speed + self.noise_std_dev * self.source.next_gaussian()
    }

    pub fn noise_std_dev(&self) -> f64 {
        self.noise_std_dev
    }
}

impl Encoder<ZeroNoise> {
    /// Encoder that reports the true speed exactly
    pub fn ideal() -> Self {
        Self {
            noise_std_dev: 0.0,
            source: ZeroNoise,
        }
    }
}
