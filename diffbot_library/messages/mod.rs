//! Message types produced by the control loop
//!
//! - Drive: per-wheel targets and the wheel identifier
//! - Records: one [`StepRecord`] per tick, carrying a [`WheelSample`] per wheel
//!
//! All message types are re-exported at the crate root for convenience.

pub mod drive;
pub mod step_record;

pub use drive::{Wheel, WheelTargets};
pub use step_record::{StepRecord, WheelSample};
