//! # diffsim - diffbot velocity control simulation
//!
//! Runs both wheels of the differential drive for the configured number of
//! ticks and logs a per-tick table followed by a metrics summary.
//!
//! Usage:
//!   diffsim                                  # Reference scenario
//!   diffsim --config robot.toml              # Custom configuration
//!   diffsim --seed 42 --noise 0.5            # Override single values
//!   diffsim --realtime                       # Pace ticks to wall-clock time
//!   diffsim --output run.json --quiet        # Record without the table
//!
//! Log verbosity follows `RUST_LOG` (default `info`; `debug` adds per-tick
//! detail from the control loop).

use anyhow::{Context, Result};
use clap::Parser;
use diffbot_core::{RealTimePacer, Unpaced};
use diffbot_library::{Simulation, StepRecord};
use diffsim::{format_step, Args, Recording, RunMetrics};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Parse command line arguments
    let args = Args::parse();
    let params = args.resolve_params()?;

    if let Some(path) = &args.write_config {
        params
            .save(path)
            .with_context(|| format!("Failed to write configuration to {:?}", path))?;
        info!("Wrote effective configuration to {:?}", path);
    }

    let simulation = Simulation::new(params)?;
    let control = simulation.records()?;

    let targets = control.targets();
    info!(
        "Targets | L RPM: {:7.2} | R RPM: {:7.2}",
        targets.left, targets.right
    );

    let records = if args.realtime {
        info!(
            "Pacing ticks every {:?}",
            simulation.params().controller.tick_period()
        );
        let mut paced = control.paced(RealTimePacer::new());
        let records = collect(paced.by_ref(), args.quiet);
        let overruns = paced.pacer().overruns();
        if overruns > 0 {
            warn!("{} ticks started late", overruns);
        }
        records
    } else {
        collect(control.paced(Unpaced), args.quiet)
    };

    RunMetrics::from_records(&records, simulation.seed()).log_summary();

    if let Some(path) = &args.output {
        let recording = Recording::new("diffsim", simulation.params(), simulation.seed(), records);
        recording.write(path)?;
        info!("Saved {} ticks to {:?}", recording.metadata.tick_count, path);
    }

    Ok(())
}

/// Drain the loop, logging one table line per tick unless `quiet`
fn collect(records: impl Iterator<Item = StepRecord>, quiet: bool) -> Vec<StepRecord> {
    records
        .inspect(|record| {
            if !quiet {
                info!("{}", format_step(record));
            }
        })
        .collect()
}
