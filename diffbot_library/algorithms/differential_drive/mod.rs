//! Differential Drive Kinematics
//!
//! Maps body-frame velocity commands to per-wheel speed targets and back.
//!
//! # Features
//!
//! - Inverse kinematics (robot velocity → wheel speeds, m/s or RPM)
//! - Forward kinematics (wheel speeds → robot velocity)
//! - RPM ↔ surface speed conversion for the configured wheel radius
//!
//! # Example
//!
//! ```rust
//! use diffbot_library::algorithms::differential_drive::DifferentialDrive;
//!
//! let dd = DifferentialDrive::new(0.3, 0.05).unwrap();  // wheel_base, wheel_radius
//!
//! // Convert a body velocity into wheel speed targets (RPM)
//! let targets = dd.wheel_targets(0.6, 0.8);  // linear, angular
//! assert!(targets.right > targets.left);
//! ```

use crate::messages::WheelTargets;
use diffbot_core::error::ensure_positive;
use diffbot_core::{DiffbotResult, RobotParams};
use std::f64::consts::PI;

/// Differential Drive Kinematics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialDrive {
    wheel_base: f64,   // Distance between wheels (m)
    wheel_radius: f64, // Wheel radius (m)
}

impl DifferentialDrive {
    /// Create new differential drive kinematics
    ///
    /// # Arguments
    /// * `wheel_base` - Distance between left and right wheels (meters)
    /// * `wheel_radius` - Radius of wheels (meters)
    pub fn new(wheel_base: f64, wheel_radius: f64) -> DiffbotResult<Self> {
        ensure_positive("wheel_base", wheel_base)?;
        ensure_positive("wheel_radius", wheel_radius)?;

        Ok(Self {
            wheel_base,
            wheel_radius,
        })
    }

    /// Create kinematics from the robot section of the config
    pub fn from_params(params: &RobotParams) -> DiffbotResult<Self> {
        Self::new(params.wheel_base, params.wheel_radius)
    }

    /// Wheel RPM needed per m/s of surface speed
    pub fn rpm_per_mps(&self) -> f64 {
        60.0 / (2.0 * PI * self.wheel_radius)
    }

    /// Inverse kinematics: Convert robot velocity to wheel speeds
    ///
    /// # Arguments
    /// * `linear` - Linear velocity (m/s)
    /// * `angular` - Angular velocity (rad/s)
    ///
    /// # Returns
    /// (left_wheel_speed, right_wheel_speed) in m/s
    pub fn inverse_kinematics(&self, linear: f64, angular: f64) -> (f64, f64) {
        let left = linear - (angular * self.wheel_base / 2.0);
        let right = linear + (angular * self.wheel_base / 2.0);
        (left, right)
    }

    /// Convert robot velocity to wheel speed targets in RPM
    pub fn wheel_targets(&self, linear: f64, angular: f64) -> WheelTargets {
        let rpm_per_mps = self.rpm_per_mps();
        let (left, right) = self.inverse_kinematics(linear, angular);
        WheelTargets {
            left: rpm_per_mps * left,
            right: rpm_per_mps * right,
        }
    }

    /// Forward kinematics: Convert wheel speeds to robot velocity
    ///
    /// # Arguments
    /// * `left_speed` - Left wheel speed (m/s)
    /// * `right_speed` - Right wheel speed (m/s)
    ///
    /// # Returns
    /// (linear_velocity, angular_velocity)
    pub fn forward_kinematics(&self, left_speed: f64, right_speed: f64) -> (f64, f64) {
        let linear = (left_speed + right_speed) / 2.0;
        let angular = (right_speed - left_speed) / self.wheel_base;
        (linear, angular)
    }

    /// Forward kinematics from wheel speeds given in RPM
    pub fn body_velocity_from_rpm(&self, left_rpm: f64, right_rpm: f64) -> (f64, f64) {
        self.forward_kinematics(self.rpm_to_linear(left_rpm), self.rpm_to_linear(right_rpm))
    }

    /// Convert wheel RPM to surface speed (m/s)
    pub fn rpm_to_linear(&self, rpm: f64) -> f64 {
        rpm / self.rpm_per_mps()
    }

    /// Convert surface speed (m/s) to wheel RPM
    pub fn linear_to_rpm(&self, linear_speed: f64) -> f64 {
        linear_speed * self.rpm_per_mps()
    }

    /// Get wheel base
    pub fn get_wheel_base(&self) -> f64 {
        self.wheel_base
    }

    /// Get wheel radius
    pub fn get_wheel_radius(&self) -> f64 {
        self.wheel_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_drive() -> DifferentialDrive {
        DifferentialDrive::new(0.3, 0.05).unwrap()
    }

    #[test]
    fn test_rpm_per_mps() {
        let dd = reference_drive();
        assert_relative_eq!(dd.rpm_per_mps(), 190.9859317102744, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_targets() {
        let dd = reference_drive();
        let targets = dd.wheel_targets(0.6, 0.8);

        assert_relative_eq!(targets.left, 91.67324722093171, epsilon = 1e-9);
        assert_relative_eq!(targets.right, 137.50987083139756, epsilon = 1e-9);
    }

    #[test]
    fn test_target_difference_tracks_turn_rate() {
        let dd = reference_drive();

        for &(linear, angular) in &[(0.6, 0.8), (0.0, 1.0), (-0.4, -2.5), (1.5, 0.0)] {
            let targets = dd.wheel_targets(linear, angular);
            let expected = dd.rpm_per_mps() * angular * dd.get_wheel_base();
            assert_relative_eq!(
                targets.right - targets.left,
                expected,
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_straight_line_targets_match() {
        let dd = reference_drive();
        let targets = dd.wheel_targets(1.0, 0.0);
        assert_eq!(targets.left, targets.right);
    }

    #[test]
    fn test_rotation_in_place() {
        let dd = reference_drive();
        let targets = dd.wheel_targets(0.0, 1.0);
        assert!(targets.left < 0.0);
        assert!(targets.right > 0.0);
        assert_relative_eq!(targets.left, -targets.right);
    }

    #[test]
    fn test_roundtrip() {
        let dd = reference_drive();

        let targets = dd.wheel_targets(0.8, 0.3);
        let (linear, angular) = dd.body_velocity_from_rpm(targets.left, targets.right);

        assert_relative_eq!(linear, 0.8, epsilon = 1e-9);
        assert_relative_eq!(angular, 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_forward_motion() {
        let dd = reference_drive();

        let (linear, angular) = dd.forward_kinematics(1.0, 1.0);

        assert_eq!(linear, 1.0);
        assert_eq!(angular, 0.0);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert_eq!(
            DifferentialDrive::new(0.3, 0.0).unwrap_err().parameter(),
            Some("wheel_radius")
        );
        assert_eq!(
            DifferentialDrive::new(-0.3, 0.05).unwrap_err().parameter(),
            Some("wheel_base")
        );
    }

    #[test]
    fn test_from_params() {
        let dd = DifferentialDrive::from_params(&RobotParams::default()).unwrap();
        assert_eq!(dd.get_wheel_base(), 0.3);
        assert_eq!(dd.get_wheel_radius(), 0.05);
    }
}
