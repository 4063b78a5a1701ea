//! Pure computational algorithms
//!
//! No I/O and no hidden state beyond what each controller owns.
//!
//! ## Control
//! - **pid**: PID feedback control with output saturation and anti-windup
//! - **differential_drive**: differential drive kinematics (body velocity ↔ wheel speeds)

pub mod differential_drive;
pub mod pid;

pub use differential_drive::DifferentialDrive;
pub use pid::{saturate, PidOutput, PID};
