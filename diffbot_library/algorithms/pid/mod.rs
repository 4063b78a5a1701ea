//! PID (Proportional-Integral-Derivative) Controller
//!
//! Discrete PID used to drive a wheel toward its target speed.
//!
//! # Features
//!
//! - Proportional, integral, and derivative terms
//! - Symmetric output saturation
//! - Conditional-integration anti-windup: the integral is only committed on
//!   ticks where the output did not saturate
//!
//! # Example
//!
//! ```rust
//! use diffbot_library::algorithms::pid::PID;
//!
//! let mut pid = PID::new(0.6, 0.05, 0.1, 100.0).unwrap();
//!
//! let output = pid.compute(120.0, 80.0, 0.1);  // setpoint, feedback, dt
//! assert!(output > 0.0 && output <= 100.0);
//! ```

use diffbot_core::error::{ensure_finite, ensure_non_negative};
use diffbot_core::{ControllerParams, DiffbotResult};

/// Clamp `value` to `[-limit, limit]`, reporting whether clamping happened
pub fn saturate(value: f64, limit: f64) -> (f64, bool) {
    if value > limit {
        (limit, true)
    } else if value < -limit {
        (-limit, true)
    } else {
        (value, false)
    }
}

/// Intermediate values of one PID update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidOutput {
    /// `setpoint - feedback`
    pub error: f64,
    /// Unclamped control value
    pub raw: f64,
    /// Control value after saturation
    pub output: f64,
    /// Whether `raw` was outside `[-max_output, max_output]`
    pub saturated: bool,
    /// Integral state after this update
    pub integral: f64,
}

/// PID Controller
#[derive(Debug, Clone)]
pub struct PID {
    kp: f64, // Proportional gain
    ki: f64, // Integral gain
    kd: f64, // Derivative gain

    max_output: f64,

    integral: f64,
    last_error: f64,
}

impl PID {
    /// Create new PID controller with a symmetric output bound
    pub fn new(kp: f64, ki: f64, kd: f64, max_output: f64) -> DiffbotResult<Self> {
        ensure_finite("kp", kp)?;
        ensure_finite("ki", ki)?;
        ensure_finite("kd", kd)?;
        ensure_non_negative("max_output", max_output)?;

        Ok(Self {
            kp,
            ki,
            kd,
            max_output,
            integral: 0.0,
            last_error: 0.0,
        })
    }

    /// Create a PID controller from the controller section of the config
    pub fn from_params(params: &ControllerParams) -> DiffbotResult<Self> {
        Self::new(params.kp, params.ki, params.kd, params.max_output)
    }

    /// Set PID gains
    pub fn set_gains(&mut self, kp: f64, ki: f64, kd: f64) {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
    }

    /// Reset controller state
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.last_error = 0.0;
    }

    /// Compute control output
    ///
    /// # Arguments
    /// * `setpoint` - Desired value
    /// * `feedback` - Current measured value
    /// * `dt` - Time step (seconds)
    ///
    /// # Returns
    /// Control output value in `[-max_output, max_output]`
    pub fn compute(&mut self, setpoint: f64, feedback: f64, dt: f64) -> f64 {
        self.step(setpoint, feedback, dt).output
    }

    /// Compute control output and expose the intermediate terms
    ///
    /// `dt` must be positive. Validated configurations guarantee this; a
    /// direct call with `dt <= 0` falls back to a proportional-only update
    /// that leaves the integral and the derivative history untouched.
    pub fn step(&mut self, setpoint: f64, feedback: f64, dt: f64) -> PidOutput {
        let error = setpoint - feedback;

        if dt <= 0.0 {
            tracing::warn!(dt, "non-positive dt, skipping integral and derivative terms");
            let raw = self.kp * error;
            let (output, saturated) = saturate(raw, self.max_output);
            return PidOutput {
                error,
                raw,
                output,
                saturated,
                integral: self.integral,
            };
        }

        let derivative = (error - self.last_error) / dt;
        let integral_candidate = self.integral + error * dt;

        let raw = self.kp * error + self.ki * integral_candidate + self.kd * derivative;
        let (output, saturated) = saturate(raw, self.max_output);

        // Anti-windup: freeze the integral while saturated
        if !saturated {
            self.integral = integral_candidate;
        }

        self.last_error = error;

        PidOutput {
            error,
            raw,
            output,
            saturated,
            integral: self.integral,
        }
    }

    /// Get integral value
    pub fn get_integral(&self) -> f64 {
        self.integral
    }

    /// Get error from the previous update
    pub fn get_last_error(&self) -> f64 {
        self.last_error
    }

    /// Get current gains
    pub fn get_gains(&self) -> (f64, f64, f64) {
        (self.kp, self.ki, self.kd)
    }

    /// Get output saturation bound
    pub fn get_max_output(&self) -> f64 {
        self.max_output
    }
}
