//! Command-line arguments and how they override the configuration

use anyhow::{Context, Result};
use clap::Parser;
use diffbot_core::SimParams;
use diffbot_library::StepRecord;
use std::path::PathBuf;

/// CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "diffsim")]
#[command(about = "Differential-drive velocity control simulation")]
pub struct Args {
    /// Simulation configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of control ticks to run
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Seed for the encoder noise (random if neither this nor the config sets one)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Encoder noise standard deviation (RPM)
    #[arg(long)]
    pub noise: Option<f64>,

    /// Commanded linear velocity (m/s)
    #[arg(long, allow_negative_numbers = true)]
    pub linear: Option<f64>,

    /// Commanded angular velocity (rad/s)
    #[arg(long, allow_negative_numbers = true)]
    pub angular: Option<f64>,

    /// Pace ticks to one controller period of wall-clock time each
    #[arg(long)]
    pub realtime: bool,

    /// Write every tick to a .csv or .json file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Save the effective configuration (after overrides) as TOML
    #[arg(long)]
    pub write_config: Option<PathBuf>,

    /// Only log the summary, not every tick
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Load the configured parameters, apply command-line overrides and validate
    pub fn resolve_params(&self) -> Result<SimParams> {
        let mut params = match &self.config {
            Some(path) => SimParams::load(path)
                .with_context(|| format!("Failed to load configuration from {:?}", path))?,
            None => SimParams::default(),
        };

        if let Some(iterations) = self.iterations {
            params.iterations = iterations;
        }
        if let Some(seed) = self.seed {
            params.seed = Some(seed);
        }
        if let Some(noise) = self.noise {
            params.sensor.noise_std_dev = noise;
        }
        if let Some(linear) = self.linear {
            params.command.linear = linear;
        }
        if let Some(angular) = self.angular {
            params.command.angular = angular;
        }

        params
            .validate()
            .context("Invalid configuration after applying command-line overrides")?;

        Ok(params)
    }
}

/// One line of the per-tick table
pub fn format_step(record: &StepRecord) -> String {
    format!(
        "Step {:02} | L RPM: {:7.2} | R RPM: {:7.2}",
        record.tick, record.left.speed, record.right.speed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffbot_library::WheelSample;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "diffsim",
            "--iterations",
            "12",
            "--seed",
            "7",
            "--angular",
            "-0.5",
            "--write-config",
            "out.toml",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(args.iterations, Some(12));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.angular, Some(-0.5));
        assert_eq!(args.write_config, Some(PathBuf::from("out.toml")));
        assert!(args.quiet);
        assert!(!args.realtime);
    }

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let args = Args {
            iterations: Some(5),
            seed: Some(3),
            noise: Some(0.0),
            linear: Some(1.0),
            ..Default::default()
        };
        let params = args.resolve_params().unwrap();

        assert_eq!(params.iterations, 5);
        assert_eq!(params.seed, Some(3));
        assert_eq!(params.sensor.noise_std_dev, 0.0);
        assert_eq!(params.command.linear, 1.0);
        assert_eq!(params.command.angular, 0.8);
        assert_eq!(params.controller, SimParams::default().controller);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = Args {
            noise: Some(-1.0),
            ..Default::default()
        };
        assert!(args.resolve_params().is_err());
    }

    #[test]
    fn test_format_step() {
        let record = StepRecord {
            tick: 3,
            time: 0.3,
            left: WheelSample {
                speed: 10.0,
                ..Default::default()
            },
            right: WheelSample {
                speed: 137.5,
                ..Default::default()
            },
        };

        assert_eq!(
            format_step(&record),
            "Step 03 | L RPM:   10.00 | R RPM:  137.50"
        );
    }
}
