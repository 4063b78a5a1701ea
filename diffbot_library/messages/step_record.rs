use super::drive::Wheel;
use serde::{Deserialize, Serialize};

/// One wheel's signals for a single tick
///
/// `speed` is the motor speed after this tick's update; every other field is
/// the value computed on the way there.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelSample {
    /// Commanded speed (RPM)
    pub target: f64,
    /// Raw encoder reading
    pub measured: f64,
    /// Moving-average output
    pub filtered: f64,
    /// Filtered value after the measurement delay
    pub delayed: f64,
    /// `target - delayed`
    pub error: f64,
    /// Clamped PID output sent to the motor
    pub control: f64,
    /// Whether the PID output hit its bound
    pub saturated: bool,
    /// Motor speed after the update (RPM)
    pub speed: f64,
}

/// Everything the control loop computed in one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based tick index
    pub tick: u64,
    /// Nominal simulation time at the start of the tick (`tick * dt`)
    pub time: f64,
    pub left: WheelSample,
    pub right: WheelSample,
}

impl StepRecord {
    /// Sample for one wheel
    pub fn wheel(&self, wheel: Wheel) -> &WheelSample {
        match wheel {
            Wheel::Left => &self.left,
            Wheel::Right => &self.right,
        }
    }

    /// True if either wheel's controller saturated this tick
    pub fn any_saturated(&self) -> bool {
        self.left.saturated || self.right.saturated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_accessor() {
        let record = StepRecord {
            tick: 4,
            time: 0.4,
            left: WheelSample {
                speed: 12.0,
                ..Default::default()
            },
            right: WheelSample {
                speed: 18.0,
                saturated: true,
                ..Default::default()
            },
        };

        assert_eq!(record.wheel(Wheel::Left).speed, 12.0);
        assert_eq!(record.wheel(Wheel::Right).speed, 18.0);
        assert!(record.any_saturated());
    }
}
