//! # Diffbot Core
//!
//! Shared building blocks for the diffbot velocity-control simulation.
//!
//! - **Errors**: a single error type for configuration and file handling
//! - **Params**: one validated configuration value covering gains, limits,
//!   signal conditioning, robot geometry and the commanded body velocity
//! - **Scheduling**: optional tick pacing, kept out of the numeric path
//!
//! ## Quick Start
//!
//! ```rust
//! use diffbot_core::SimParams;
//!
//! let params = SimParams::from_toml_str(
//!     r#"
//!     iterations = 40
//!
//!     [controller]
//!     dt = 0.2
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(params.iterations, 40);
//! assert_eq!(params.controller.dt, 0.2);
//! assert_eq!(params.sensor.window_size, 5);
//! ```

pub mod error;
pub mod params;
pub mod scheduling;

// Re-export commonly used types for easy access
pub use error::{DiffbotError, DiffbotResult};
pub use params::{CommandParams, ControllerParams, RobotParams, SensorParams, SimParams};
pub use scheduling::{Pacer, RealTimePacer, Unpaced};
