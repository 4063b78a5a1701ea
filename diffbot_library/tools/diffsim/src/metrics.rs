//! Run metrics for controller evaluation
//!
//! Summarises how well each wheel tracked its target over a run: where it
//! ended up, how hard the controller pushed, and whether the approach was
//! monotonic.

use anyhow::{Context, Result};
use diffbot_library::{StepRecord, Wheel, WheelSample};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Tracking metrics for one wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelMetrics {
    pub target: f64,
    pub final_speed: f64,
    /// `target - final_speed`
    pub final_error: f64,
    pub peak_speed: f64,
    /// Largest control magnitude sent to the motor
    pub peak_control: f64,
    pub saturated_ticks: u64,
    /// True if the speed never stepped back away from the target's sign
    pub monotonic: bool,
}

impl Default for WheelMetrics {
    fn default() -> Self {
        Self {
            target: 0.0,
            final_speed: 0.0,
            final_error: 0.0,
            peak_speed: 0.0,
            peak_control: 0.0,
            saturated_ticks: 0,
            monotonic: true,
        }
    }
}

impl WheelMetrics {
    /// Compute metrics from one wheel's samples, in tick order
    pub fn from_samples<'a>(samples: impl IntoIterator<Item = &'a WheelSample>) -> Self {
        let mut metrics = Self::default();
        let mut previous_speed: Option<f64> = None;

        for sample in samples {
            metrics.target = sample.target;
            metrics.final_speed = sample.speed;
            metrics.peak_control = metrics.peak_control.max(sample.control.abs());
            if sample.saturated {
                metrics.saturated_ticks += 1;
            }

            match previous_speed {
                Some(previous) => {
                    metrics.peak_speed = metrics.peak_speed.max(sample.speed);
                    let advancing = if sample.target >= 0.0 {
                        sample.speed >= previous
                    } else {
                        sample.speed <= previous
                    };
                    metrics.monotonic &= advancing;
                }
                None => metrics.peak_speed = sample.speed,
            }
            previous_speed = Some(sample.speed);
        }

        metrics.final_error = metrics.target - metrics.final_speed;
        metrics
    }

    /// Final speed as a fraction of the target (0.0 for a zero target)
    pub fn tracking_ratio(&self) -> f64 {
        if self.target == 0.0 {
            return 0.0;
        }
        self.final_speed / self.target
    }
}

/// Metrics for a complete run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub ticks: u64,
    /// Simulation time of the last tick (s)
    pub final_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub left: WheelMetrics,
    pub right: WheelMetrics,
}

impl RunMetrics {
    pub fn from_records(records: &[StepRecord], seed: Option<u64>) -> Self {
        Self {
            ticks: records.len() as u64,
            final_time: records.last().map(|r| r.time).unwrap_or(0.0),
            seed,
            left: WheelMetrics::from_samples(records.iter().map(|r| r.wheel(Wheel::Left))),
            right: WheelMetrics::from_samples(records.iter().map(|r| r.wheel(Wheel::Right))),
        }
    }

    pub fn wheel(&self, wheel: Wheel) -> &WheelMetrics {
        match wheel {
            Wheel::Left => &self.left,
            Wheel::Right => &self.right,
        }
    }

    /// Log a human-readable summary
    pub fn log_summary(&self) {
        info!(
            "Run complete: {} ticks, t = {:.2}s, seed {}",
            self.ticks,
            self.final_time,
            self.seed
                .map(|seed| seed.to_string())
                .unwrap_or_else(|| "none".to_string())
        );

        for wheel in Wheel::ALL {
            let m = self.wheel(wheel);
            info!(
                "  {:>5} | target {:7.2} | final {:7.2} ({:5.1}%) | error {:7.2} | peak ctrl {:6.2} | saturated {} | monotonic {}",
                wheel.label(),
                m.target,
                m.final_speed,
                m.tracking_ratio() * 100.0,
                m.final_error,
                m.peak_control,
                m.saturated_ticks,
                m.monotonic
            );
        }
    }

    /// Export metrics to JSON format
    pub fn export_to_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize metrics")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write metrics to {:?}", path))?;
        Ok(())
    }

    /// Load metrics from JSON file
    pub fn load_from_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read metrics from {:?}", path))?;
        let metrics: Self = serde_json::from_str(&json).context("Failed to parse metrics")?;
        Ok(metrics)
    }
}
