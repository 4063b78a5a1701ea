//! Recording export for diffsim
//!
//! A [`Recording`] bundles a run's records with the configuration that
//! produced them. It can be saved as JSON and loaded back, or flattened into
//! one CSV row per tick for plotting.

use anyhow::{bail, Context, Result};
use diffbot_core::SimParams;
use diffbot_library::{StepRecord, WheelTargets};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File format for a recording, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "Unsupported output file {:?}: expected a .csv or .json extension",
                path
            ),
        }
    }
}

/// Metadata about a recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    /// Recording name
    pub name: String,

    /// Seed behind the encoder noise, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Total number of ticks recorded
    pub tick_count: u64,

    /// Per-wheel targets (RPM)
    pub targets: WheelTargets,

    /// Configuration the run was produced with, including the resolved seed
    pub params: SimParams,
}

/// Complete recording session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub metadata: RecordingMetadata,
    pub records: Vec<StepRecord>,
}

/// One tick flattened into a CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub tick: u64,
    pub time: f64,
    pub left_target: f64,
    pub left_measured: f64,
    pub left_filtered: f64,
    pub left_delayed: f64,
    pub left_error: f64,
    pub left_control: f64,
    pub left_saturated: bool,
    pub left_speed: f64,
    pub right_target: f64,
    pub right_measured: f64,
    pub right_filtered: f64,
    pub right_delayed: f64,
    pub right_error: f64,
    pub right_control: f64,
    pub right_saturated: bool,
    pub right_speed: f64,
}

impl From<&StepRecord> for CsvRow {
    fn from(record: &StepRecord) -> Self {
        let (l, r) = (&record.left, &record.right);
        Self {
            tick: record.tick,
            time: record.time,
            left_target: l.target,
            left_measured: l.measured,
            left_filtered: l.filtered,
            left_delayed: l.delayed,
            left_error: l.error,
            left_control: l.control,
            left_saturated: l.saturated,
            left_speed: l.speed,
            right_target: r.target,
            right_measured: r.measured,
            right_filtered: r.filtered,
            right_delayed: r.delayed,
            right_error: r.error,
            right_control: r.control,
            right_saturated: r.saturated,
            right_speed: r.speed,
        }
    }
}

impl Recording {
    /// Create a recording from a finished run
    pub fn new(
        name: impl Into<String>,
        params: &SimParams,
        seed: Option<u64>,
        records: Vec<StepRecord>,
    ) -> Self {
        let mut params = params.clone();
        if seed.is_some() {
            params.seed = seed;
        }

        let targets = records
            .first()
            .map(|r| WheelTargets::new(r.left.target, r.right.target))
            .unwrap_or_default();

        Self {
            metadata: RecordingMetadata {
                name: name.into(),
                seed,
                tick_count: records.len() as u64,
                targets,
                params,
            },
            records,
        }
    }

    /// Write the recording in the format implied by the file extension
    pub fn write(&self, path: &Path) -> Result<()> {
        match OutputFormat::from_path(path)? {
            OutputFormat::Csv => self.export_to_csv(path),
            OutputFormat::Json => self.save_to_json(path),
        }
    }

    /// Save recording to a JSON file
    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize recording to JSON")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write recording to {:?}", path))?;

        Ok(())
    }

    /// Load recording from a JSON file
    pub fn load_from_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recording from {:?}", path))?;

        let recording: Recording =
            serde_json::from_str(&json).context("Failed to deserialize recording from JSON")?;

        Ok(recording)
    }

    /// Export one row per tick to CSV
    pub fn export_to_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create CSV file at {:?}", path))?;

        for record in &self.records {
            wtr.serialize(CsvRow::from(record))?;
        }

        wtr.flush()?;
        Ok(())
    }
}
