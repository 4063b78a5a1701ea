//! # diffsim - diffbot simulation runner
//!
//! This crate provides both a binary executable and a library interface for
//! running the two-wheel velocity controller from the command line.
//!
//! ## Binary Usage
//! ```bash
//! diffsim                                  # Reference scenario, random seed
//! diffsim --config robot.toml --seed 42    # Custom configuration
//! diffsim --realtime                       # One tick per dt of wall-clock time
//! diffsim --output run.csv                 # Export every tick
//! ```
//!
//! ## Library Usage
//! ```rust
//! use diffbot_core::SimParams;
//! use diffbot_library::Simulation;
//! use diffsim::{Recording, RunMetrics};
//!
//! let params = SimParams { iterations: 10, seed: Some(1), ..Default::default() };
//! let simulation = Simulation::new(params.clone()).unwrap();
//! let records = simulation.run().unwrap();
//!
//! let metrics = RunMetrics::from_records(&records, simulation.seed());
//! assert_eq!(metrics.ticks, 10);
//!
//! let recording = Recording::new("doc", &params, simulation.seed(), records);
//! assert_eq!(recording.metadata.tick_count, 10);
//! ```

// Command-line arguments and overrides
pub mod cli;

// Run summary
pub mod metrics;

// Recording export
pub mod recorder;

pub use cli::{format_step, Args};
pub use metrics::{RunMetrics, WheelMetrics};
pub use recorder::{CsvRow, OutputFormat, Recording, RecordingMetadata};
