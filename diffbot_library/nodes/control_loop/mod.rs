//! Two-wheel control loop
//!
//! [`DifferentialDriveLoop`] turns a body velocity command into per-wheel
//! targets once, then ticks both wheel controllers in lockstep and yields one
//! [`StepRecord`] per tick. It is an [`Iterator`], so a run can be consumed
//! lazily, collected, or paced in real time with [`DifferentialDriveLoop::paced`].
//!
//! [`Simulation`] wraps a validated [`SimParams`] and hands out fresh loops,
//! which makes a configured run restartable and, given its seed, replayable.

use crate::algorithms::differential_drive::DifferentialDrive;
use crate::messages::{StepRecord, Wheel, WheelTargets};
use crate::nodes::encoder::{GaussianNoise, NoiseSource};
use crate::nodes::speed_controller::WheelSpeedController;
use diffbot_core::{DiffbotResult, Pacer, SimParams};
use std::iter::FusedIterator;
use std::time::Duration;
use tracing::{debug, info};

/// Ticks both wheels of a differential drive for a fixed number of steps
#[derive(Debug, Clone)]
pub struct DifferentialDriveLoop<N = GaussianNoise> {
    left: WheelSpeedController<N>,
    right: WheelSpeedController<N>,
    targets: WheelTargets,

    dt: f64,
    period: Duration,
    iterations: u64,
    tick: u64,
}

impl<N: NoiseSource> DifferentialDriveLoop<N> {
    /// Build a loop from validated parameters and one noise source per wheel
    pub fn new(params: &SimParams, left_noise: N, right_noise: N) -> DiffbotResult<Self> {
        params.validate()?;

        let drive = DifferentialDrive::from_params(&params.robot)?;
        let targets = drive.wheel_targets(params.command.linear, params.command.angular);

        let left =
            WheelSpeedController::new(targets.left, &params.controller, &params.sensor, left_noise)?;
        let right = WheelSpeedController::new(
            targets.right,
            &params.controller,
            &params.sensor,
            right_noise,
        )?;

        debug!(
            left_rpm = targets.left,
            right_rpm = targets.right,
            iterations = params.iterations,
            dt = params.controller.dt,
            "built differential drive loop"
        );

        Ok(Self {
            left,
            right,
            targets,
            dt: params.controller.dt,
            period: params.controller.tick_period(),
            iterations: params.iterations,
            tick: 0,
        })
    }

    /// Advance both wheels by one tick, or return `None` once the run is over
    pub fn step(&mut self) -> Option<StepRecord> {
        if self.tick >= self.iterations {
            return None;
        }

        let tick = self.tick;
        let left = self.left.tick(self.dt);
        let right = self.right.tick(self.dt);
        self.tick += 1;

        debug!(
            tick,
            left_speed = left.speed,
            left_control = left.control,
            right_speed = right.speed,
            right_control = right.control,
            "tick"
        );

        Some(StepRecord {
            tick,
            time: tick as f64 * self.dt,
            left,
            right,
        })
    }

    /// Per-wheel targets derived from the body velocity command
    pub fn targets(&self) -> WheelTargets {
        self.targets
    }

    pub fn ticks_completed(&self) -> u64 {
        self.tick
    }

    /// Ticks left before the loop stops
    pub fn remaining(&self) -> u64 {
        self.iterations - self.tick
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// The controller driving one wheel
    pub fn wheel(&self, wheel: Wheel) -> &WheelSpeedController<N> {
        match wheel {
            Wheel::Left => &self.left,
            Wheel::Right => &self.right,
        }
    }

    /// Wrap the loop so `pacer` runs before every tick
    ///
    /// Pacing only changes when records are produced, never their values.
    pub fn paced<P: Pacer>(self, pacer: P) -> Paced<N, P> {
        Paced {
            inner: self,
            pacer,
        }
    }
}

impl<N: NoiseSource> Iterator for DifferentialDriveLoop<N> {
    type Item = StepRecord;

    fn next(&mut self) -> Option<StepRecord> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<N: NoiseSource> FusedIterator for DifferentialDriveLoop<N> {}

/// A [`DifferentialDriveLoop`] that waits on a [`Pacer`] before each tick
#[derive(Debug)]
pub struct Paced<N, P> {
    inner: DifferentialDriveLoop<N>,
    pacer: P,
}

impl<N, P> Paced<N, P> {
    pub fn inner(&self) -> &DifferentialDriveLoop<N> {
        &self.inner
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }
}

impl<N: NoiseSource, P: Pacer> Iterator for Paced<N, P> {
    type Item = StepRecord;

    fn next(&mut self) -> Option<StepRecord> {
        if self.inner.remaining() == 0 {
            return None;
        }
        self.pacer.pace(self.inner.period);
        self.inner.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N: NoiseSource, P: Pacer> FusedIterator for Paced<N, P> {}

/// A configured, restartable simulation run
///
/// Every call to [`records`](Self::records) starts from the same initial
/// state, so the same `Simulation` always yields the same records.
#[derive(Debug, Clone)]
pub struct Simulation<N = GaussianNoise> {
    params: SimParams,
    seed: Option<u64>,
    left_noise: N,
    right_noise: N,
}

impl Simulation<GaussianNoise> {
    /// Create a simulation with seeded Gaussian encoder noise
    ///
    /// When `params.seed` is unset a seed is drawn at random and logged, so
    /// the run can be replayed by putting that seed into the configuration.
    pub fn new(params: SimParams) -> DiffbotResult<Self> {
        params.validate()?;

        let seed = match params.seed {
            Some(seed) => seed,
            None => {
                let seed = u64::from(rand::random::<u32>());
                info!(seed, "no seed configured, drew a random one");
                seed
            }
        };

        info!(seed, iterations = params.iterations, "simulation configured");

        Ok(Self {
            left_noise: GaussianNoise::from_seed_and_stream(seed, Wheel::Left.index()),
            right_noise: GaussianNoise::from_seed_and_stream(seed, Wheel::Right.index()),
            seed: Some(seed),
            params,
        })
    }
}

impl<N: NoiseSource + Clone> Simulation<N> {
    /// Create a simulation that replays the given noise sources on every run
    pub fn with_noise(params: SimParams, left_noise: N, right_noise: N) -> DiffbotResult<Self> {
        params.validate()?;
        Ok(Self {
            seed: params.seed,
            params,
            left_noise,
            right_noise,
        })
    }

    /// A fresh loop positioned at tick zero
    pub fn records(&self) -> DiffbotResult<DifferentialDriveLoop<N>> {
        DifferentialDriveLoop::new(
            &self.params,
            self.left_noise.clone(),
            self.right_noise.clone(),
        )
    }

    /// Run to completion and collect every record
    pub fn run(&self) -> DiffbotResult<Vec<StepRecord>> {
        let records: Vec<StepRecord> = self.records()?.collect();
        info!(ticks = records.len(), "simulation finished");
        Ok(records)
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Seed behind the encoder noise, if the noise was seeded here or configured
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
