//! Simulation parameters
//!
//! All tunables live in one [`SimParams`] value that is validated before any
//! component is built. Parameters can be written by hand, loaded from a TOML
//! file, or saved back to disk. Missing keys fall back to the defaults of the
//! reference two-wheel scenario; unknown keys are rejected so that typos do
//! not silently fall back to a default.

use crate::error::{
    ensure_capacity, ensure_finite, ensure_non_negative, ensure_positive, DiffbotResult,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// PID gains, output saturation, and loop period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerParams {
    /// Proportional gain
    pub kp: f64,
    /// Integral gain
    pub ki: f64,
    /// Derivative gain
    pub kd: f64,
    /// Symmetric saturation bound on the control output
    pub max_output: f64,
    /// Tick duration (seconds)
    pub dt: f64,
}

impl Default for ControllerParams {
    fn default() -> Self {
        Self {
            kp: 0.6,
            ki: 0.05,
            kd: 0.1,
            max_output: 100.0,
            dt: 0.1,
        }
    }
}

impl ControllerParams {
    pub fn validate(&self) -> DiffbotResult<()> {
        ensure_finite("kp", self.kp)?;
        ensure_finite("ki", self.ki)?;
        ensure_finite("kd", self.kd)?;
        ensure_non_negative("max_output", self.max_output)?;
        ensure_positive("dt", self.dt)?;
        Ok(())
    }

    /// Wall-clock length of one tick, for pacing
    pub fn tick_period(&self) -> Duration {
        Duration::try_from_secs_f64(self.dt).unwrap_or(Duration::ZERO)
    }
}

/// Encoder noise and the signal-conditioning pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensorParams {
    /// Standard deviation of the Gaussian encoder noise (RPM)
    pub noise_std_dev: f64,
    /// Moving-average window (samples)
    pub window_size: usize,
    /// Measurement latency (ticks)
    pub delay_steps: usize,
}

impl Default for SensorParams {
    fn default() -> Self {
        Self {
            noise_std_dev: 1.0,
            window_size: 5,
            delay_steps: 3,
        }
    }
}

impl SensorParams {
    pub fn validate(&self) -> DiffbotResult<()> {
        ensure_non_negative("noise_std_dev", self.noise_std_dev)?;
        ensure_capacity("window_size", self.window_size)?;
        ensure_capacity("delay_steps", self.delay_steps)?;
        Ok(())
    }
}

/// Drive geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RobotParams {
    /// Wheel radius (m)
    pub wheel_radius: f64,
    /// Distance between the left and right wheels (m)
    pub wheel_base: f64,
}

impl Default for RobotParams {
    fn default() -> Self {
        Self {
            wheel_radius: 0.05,
            wheel_base: 0.3,
        }
    }
}

impl RobotParams {
    pub fn validate(&self) -> DiffbotResult<()> {
        ensure_positive("wheel_radius", self.wheel_radius)?;
        ensure_positive("wheel_base", self.wheel_base)?;
        Ok(())
    }
}

/// Commanded body-frame velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandParams {
    /// Forward velocity (m/s)
    pub linear: f64,
    /// Turn rate (rad/s, counter-clockwise positive)
    pub angular: f64,
}

impl Default for CommandParams {
    fn default() -> Self {
        Self {
            linear: 0.6,
            angular: 0.8,
        }
    }
}

impl CommandParams {
    pub fn validate(&self) -> DiffbotResult<()> {
        ensure_finite("linear", self.linear)?;
        ensure_finite("angular", self.angular)?;
        Ok(())
    }
}

/// Complete configuration of a two-wheel simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimParams {
    /// Number of ticks to run
    pub iterations: u64,
    /// Encoder noise seed; `None` draws a fresh seed per simulation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub controller: ControllerParams,
    pub sensor: SensorParams,
    pub robot: RobotParams,
    pub command: CommandParams,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            iterations: 80,
            seed: None,
            controller: ControllerParams::default(),
            sensor: SensorParams::default(),
            robot: RobotParams::default(),
            command: CommandParams::default(),
        }
    }
}

impl SimParams {
    /// Check every section, failing on the first invalid parameter
    pub fn validate(&self) -> DiffbotResult<()> {
        self.controller.validate()?;
        self.sensor.validate()?;
        self.robot.validate()?;
        self.command.validate()?;
        Ok(())
    }

    /// Parse and validate parameters from a TOML document
    pub fn from_toml_str(toml_str: &str) -> DiffbotResult<Self> {
        let params: SimParams = toml::from_str(toml_str)?;
        params.validate()?;
        Ok(params)
    }

    /// Render parameters as a TOML document
    pub fn to_toml_string(&self) -> DiffbotResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate parameters from a TOML file
    pub fn load(path: &Path) -> DiffbotResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;
        let params = Self::from_toml_str(&toml_str)?;
        tracing::debug!(path = %path.display(), "loaded simulation parameters");
        Ok(params)
    }

    /// Save parameters to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> DiffbotResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, self.to_toml_string()?)?;
        tracing::debug!(path = %path.display(), "saved simulation parameters");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiffbotError;
    use approx::assert_relative_eq;

    fn invalid_parameter(params: &SimParams) -> &'static str {
        match params.validate() {
            Err(DiffbotError::InvalidConfiguration { parameter, .. }) => parameter,
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let params = SimParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.iterations, 80);
        assert_eq!(params.seed, None);
        assert_eq!(params.sensor.window_size, 5);
        assert_eq!(params.sensor.delay_steps, 3);
    }

    #[test]
    fn test_rejects_non_positive_dt() {
        let mut params = SimParams::default();
        params.controller.dt = 0.0;
        assert_eq!(invalid_parameter(&params), "dt");

        params.controller.dt = -0.1;
        assert_eq!(invalid_parameter(&params), "dt");

        params.controller.dt = f64::NAN;
        assert_eq!(invalid_parameter(&params), "dt");
    }

    #[test]
    fn test_rejects_empty_window() {
        let mut params = SimParams::default();
        params.sensor.window_size = 0;
        assert_eq!(invalid_parameter(&params), "window_size");
    }

    #[test]
    fn test_rejects_empty_delay() {
        let mut params = SimParams::default();
        params.sensor.delay_steps = 0;
        assert_eq!(invalid_parameter(&params), "delay_steps");
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut params = SimParams::default();
        params.robot.wheel_radius = 0.0;
        assert_eq!(invalid_parameter(&params), "wheel_radius");

        let mut params = SimParams::default();
        params.robot.wheel_base = -0.3;
        assert_eq!(invalid_parameter(&params), "wheel_base");
    }

    #[test]
    fn test_rejects_negative_limits() {
        let mut params = SimParams::default();
        params.controller.max_output = -1.0;
        assert_eq!(invalid_parameter(&params), "max_output");

        let mut params = SimParams::default();
        params.sensor.noise_std_dev = -0.1;
        assert_eq!(invalid_parameter(&params), "noise_std_dev");
    }

    #[test]
    fn test_zero_limits_are_allowed() {
        let mut params = SimParams::default();
        params.controller.max_output = 0.0;
        params.sensor.noise_std_dev = 0.0;
        params.iterations = 0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let params = SimParams::from_toml_str(
            r#"
            seed = 7

            [sensor]
            window_size = 1
            delay_steps = 1
            "#,
        )
        .unwrap();

        assert_eq!(params.seed, Some(7));
        assert_eq!(params.sensor.window_size, 1);
        assert_eq!(params.sensor.delay_steps, 1);
        assert_relative_eq!(params.sensor.noise_std_dev, 1.0);
        assert_relative_eq!(params.controller.kp, 0.6);
        assert_relative_eq!(params.robot.wheel_base, 0.3);
    }

    #[test]
    fn test_toml_is_validated() {
        let result = SimParams::from_toml_str("[controller]\ndt = 0.0\n");
        assert_eq!(result.unwrap_err().parameter(), Some("dt"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = SimParams::from_toml_str("[controller]\nkpp = 1.0\n");
        assert!(matches!(result, Err(DiffbotError::ConfigParse(_))));
    }

    #[test]
    fn test_to_toml_contains_sections() {
        let text = SimParams::default().to_toml_string().unwrap();
        assert!(text.contains("[controller]"));
        assert!(text.contains("[sensor]"));
        assert!(text.contains("[robot]"));
        assert!(text.contains("[command]"));
        assert!(!text.contains("seed"));
    }

    #[test]
    fn test_tick_period() {
        let controller = ControllerParams::default();
        assert_eq!(controller.tick_period(), Duration::from_millis(100));
    }
}
