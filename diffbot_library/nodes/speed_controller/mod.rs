//! Closed-loop speed control for a single wheel
//!
//! Each tick runs the full feedback path:
//!
//! ```text
//! motor speed -> encoder -> moving average -> delay -> PID -> motor
//! ```

use crate::algorithms::pid::PID;
use crate::messages::WheelSample;
use crate::nodes::dc_motor::DcMotor;
use crate::nodes::encoder::{Encoder, NoiseSource};
use crate::signal::{MeasurementDelay, MovingAverageFilter};
use diffbot_core::error::ensure_finite;
use diffbot_core::{ControllerParams, DiffbotResult, SensorParams};

/// One wheel's plant, sensor pipeline and controller
#[derive(Debug, Clone)]
pub struct WheelSpeedController<N> {
    target: f64, // RPM

    motor: DcMotor,
    encoder: Encoder<N>,
    filter: MovingAverageFilter,
    delay: MeasurementDelay,
    pid: PID,
}

impl<N: NoiseSource> WheelSpeedController<N> {
    /// Build a controller driving a motor at rest toward `target` (RPM)
    pub fn new(
        target: f64,
        controller: &ControllerParams,
        sensor: &SensorParams,
        noise: N,
    ) -> DiffbotResult<Self> {
        ensure_finite("target", target)?;

        Ok(Self {
            target,
            motor: DcMotor::new(),
            encoder: Encoder::new(sensor.noise_std_dev, noise)?,
            filter: MovingAverageFilter::new(sensor.window_size)?,
            delay: MeasurementDelay::new(sensor.delay_steps)?,
            pid: PID::from_params(controller)?,
        })
    }

    /// Advance the wheel by one tick of length `dt`
    pub fn tick(&mut self, dt: f64) -> WheelSample {
        let measured = self.encoder.read(self.motor.get_speed());
        let filtered = self.filter.filter(measured);
        let delayed = self.delay.apply(filtered);

        let pid = self.pid.step(self.target, delayed, dt);
        let speed = self.motor.update(pid.output);

        WheelSample {
            target: self.target,
            measured,
            filtered,
            delayed,
            error: pid.error,
            control: pid.output,
            saturated: pid.saturated,
            speed,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current true motor speed (RPM)
    pub fn speed(&self) -> f64 {
        self.motor.get_speed()
    }

    pub fn pid(&self) -> &PID {
        &self.pid
    }

    /// Return every stage to its initial state; the noise source keeps its position
    pub fn reset(&mut self) {
        self.motor.reset();
        self.filter.reset();
        self.delay.reset();
        self.pid.reset();
    }
}
