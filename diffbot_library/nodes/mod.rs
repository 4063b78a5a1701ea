//! Simulation nodes
//!
//! Leaf to root: the plant ([`DcMotor`]), the sensor ([`Encoder`]), one
//! wheel's closed loop ([`WheelSpeedController`]), and the two-wheel
//! orchestrator ([`DifferentialDriveLoop`], [`Simulation`]).

pub mod control_loop;
pub mod dc_motor;
pub mod encoder;
pub mod speed_controller;

pub use control_loop::{DifferentialDriveLoop, Paced, Simulation};
pub use dc_motor::{DcMotor, MOTOR_RESPONSE_GAIN};
pub use encoder::{Encoder, GaussianNoise, NoiseSource, ZeroNoise};
pub use speed_controller::WheelSpeedController;
