//! # Diffbot Library
//!
//! Plant, sensor pipeline, controller and orchestration for the diffbot
//! two-wheel velocity-control simulation.
//!
//! ## Structure
//!
//! ```text
//! diffbot_library/
//! ── algorithms/     # PID, differential drive kinematics
//! ── signal/         # Circular buffer, moving average, measurement delay
//! ── nodes/          # Motor, encoder, wheel controller, control loop
//! ── messages/       # Step records and wheel targets
//! ── tools/          # diffsim command-line runner
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use diffbot_core::SimParams;
//! use diffbot_library::Simulation;
//!
//! let params = SimParams {
//!     iterations: 20,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let simulation = Simulation::new(params).unwrap();
//! let records = simulation.run().unwrap();
//!
//! assert_eq!(records.len(), 20);
//! assert!(records.iter().all(|r| r.left.control.abs() <= 100.0));
//! ```

pub mod algorithms;
pub mod messages;
pub mod nodes;
pub mod signal;

// Re-export message types at the crate root for convenience
pub use messages::*;

pub use algorithms::{DifferentialDrive, PID};
pub use nodes::{
    DcMotor, DifferentialDriveLoop, Encoder, GaussianNoise, NoiseSource, Simulation,
    WheelSpeedController, ZeroNoise,
};
pub use signal::{CircularBuffer, MeasurementDelay, MovingAverageFilter};

/// Prelude module for convenient imports
///
/// # Usage
/// ```rust
/// use diffbot_library::prelude::*;
///
/// let params = SimParams::default();
/// let control = DifferentialDriveLoop::new(&params, ZeroNoise, ZeroNoise).unwrap();
/// assert_eq!(control.remaining(), params.iterations);
/// ```
pub mod prelude {
    pub use diffbot_core::{
        DiffbotError, DiffbotResult, Pacer, RealTimePacer, SimParams, Unpaced,
    };

    pub use crate::messages::{StepRecord, Wheel, WheelSample, WheelTargets};

    pub use crate::algorithms::{DifferentialDrive, PID};

    pub use crate::nodes::{
        DifferentialDriveLoop, GaussianNoise, NoiseSource, Simulation, ZeroNoise,
    };
}
