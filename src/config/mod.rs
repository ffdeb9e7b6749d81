pub mod cli;
pub mod toml_config;

use crate::domain::model::DensityBounds;
use crate::domain::ports::ForecastConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "crowd-forecast"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Predictive bottleneck analysis over crowd-density series")
)]
pub struct CliConfig {
    /// Venue zone the assessment and any alert are attributed to
    #[cfg_attr(feature = "cli", arg(long, default_value = "North Gate"))]
    pub zone: String,

    /// Number of observed time steps to simulate
    #[cfg_attr(feature = "cli", arg(long, default_value = "60"))]
    pub series_len: usize,

    /// Baseline density in people per square meter
    #[cfg_attr(feature = "cli", arg(long, default_value = "2.5"))]
    pub base_density: f64,

    /// Standard deviation of the simulated gaussian noise
    #[cfg_attr(feature = "cli", arg(long, default_value = "0.6"))]
    pub noise_std: f64,

    /// Seed for the noise source; omit for entropy-based seeding
    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,

    /// Forecast horizon in time steps
    #[cfg_attr(feature = "cli", arg(long, default_value = "20"))]
    pub steps: usize,

    /// Density at or above which a forecast point counts as a bottleneck
    #[cfg_attr(feature = "cli", arg(long, default_value = "4.0"))]
    pub threshold: f64,

    #[cfg_attr(feature = "cli", arg(long, default_value = "0.2"))]
    pub min_density: f64,

    #[cfg_attr(feature = "cli", arg(long, default_value = "5.0"))]
    pub max_density: f64,

    /// Append-only alert log file (newline-delimited JSON)
    #[cfg_attr(feature = "cli", arg(long, default_value = "./alerts.jsonl"))]
    pub alert_log: String,

    /// How many recent alerts to list after the run
    #[cfg_attr(feature = "cli", arg(long, default_value = "10"))]
    pub recent_limit: usize,

    /// Load evaluation parameters from a TOML file instead of flags
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(long))]
    pub verbose: bool,
}

impl ForecastConfig for CliConfig {
    fn zone(&self) -> &str {
        &self.zone
    }

    fn series_len(&self) -> usize {
        self.series_len
    }

    fn base_density(&self) -> f64 {
        self.base_density
    }

    fn noise_std(&self) -> f64 {
        self.noise_std
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn steps(&self) -> usize {
        self.steps
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn bounds(&self) -> DensityBounds {
        DensityBounds {
            min: self.min_density,
            max: self.max_density,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("zone", &self.zone)?;
        // the trend fit needs two points even though the generator accepts one
        validation::validate_positive_number("series_len", self.series_len, 2)?;
        validation::validate_positive_number("steps", self.steps, 1)?;
        validation::validate_finite("base_density", self.base_density)?;
        validation::validate_non_negative("noise_std", self.noise_std)?;
        validation::validate_bounds(
            "min_density",
            self.min_density,
            "max_density",
            self.max_density,
        )?;
        validation::validate_finite("threshold", self.threshold)?;
        // a threshold outside the plausible range makes the probability
        // degenerate (always 0.0 or always 1.0)
        validation::validate_range(
            "threshold",
            self.threshold,
            self.min_density,
            self.max_density,
        )?;
        validation::validate_non_empty_string("alert_log", &self.alert_log)?;
        Ok(())
    }
}
