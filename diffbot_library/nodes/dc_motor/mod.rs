/// Fraction of the gap between command and speed closed on every update
pub const MOTOR_RESPONSE_GAIN: f64 = 0.1;

/// Simulated DC motor - first-order lag from PWM command to speed
///
/// Each call to [`update`](Self::update) advances the plant by exactly one
/// tick. The response is independent of the loop period.
#[derive(Debug, Clone, Default)]
pub struct DcMotor {
    speed: f64, // RPM
}

impl DcMotor {
    /// Create a motor at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a PWM command and return the new speed
    pub fn update(&mut self, pwm: f64) -> f64 {
        self.speed += MOTOR_RESPONSE_GAIN * (pwm - self.speed);
        self.speed
    }

    /// Get current speed (RPM)
    pub fn get_speed(&self) -> f64 {
        self.speed
    }

    /// Bring the motor back to rest
    pub fn reset(&mut self) {
        self.speed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_at_rest() {
        assert_eq!(DcMotor::new().get_speed(), 0.0);
    }

    #[test]
    fn test_first_order_response() {
        let mut motor = DcMotor::new();

        assert_relative_eq!(motor.update(100.0), 10.0);
        assert_relative_eq!(motor.update(100.0), 19.0);
        assert_relative_eq!(motor.update(100.0), 27.1);
    }

    #[test]
    fn test_converges_to_constant_command() {
        let mut motor = DcMotor::new();
        for _ in 0..400 {
            motor.update(-40.0);
        }
        assert_relative_eq!(motor.get_speed(), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_speed_stays_between_start_and_command() {
        let mut motor = DcMotor::new();
        let mut previous = motor.get_speed();
        for _ in 0..50 {
            let speed = motor.update(60.0);
            assert!(speed >= previous && speed <= 60.0);
            previous = speed;
        }
    }

    #[test]
    fn test_reset() {
        let mut motor = DcMotor::new();
        motor.update(50.0);
        motor.reset();
        assert_eq!(motor.get_speed(), 0.0);
    }
}
