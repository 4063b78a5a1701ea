//! Tick pacing
//!
//! A control loop is numerically independent of wall-clock time. Pacing is an
//! optional layer that callers put between ticks when they want a run to
//! unfold in real time (for example when watching it live).

pub mod pacer;

pub use pacer::{Pacer, RealTimePacer, Unpaced};
