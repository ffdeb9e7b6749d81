use crate::domain::model::DensityBounds;
use crate::domain::ports::ForecastConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_SERIES_LEN: usize = 60;
const DEFAULT_NOISE_STD: f64 = 0.6;
const DEFAULT_STEPS: usize = 20;
const DEFAULT_THRESHOLD: f64 = 4.0;
const DEFAULT_ALERT_LOG: &str = "./alerts.jsonl";
const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineSection,
    pub simulation: SimulationSection,
    pub forecast: Option<ForecastSection>,
    pub risk: Option<RiskSection>,
    pub alerts: Option<AlertsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSection {
    pub zone: String,
    pub base_density: f64,
    pub series_len: Option<usize>,
    pub noise_std: Option<f64>,
    pub seed: Option<u64>,
    pub min_density: Option<f64>,
    pub max_density: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSection {
    pub steps: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSection {
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsSection {
    pub path: Option<String>,
    pub recent_limit: Option<usize>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn alert_log_path(&self) -> &str {
        self.alerts
            .as_ref()
            .and_then(|a| a.path.as_deref())
            .unwrap_or(DEFAULT_ALERT_LOG)
    }

    pub fn recent_limit(&self) -> usize {
        self.alerts
            .as_ref()
            .and_then(|a| a.recent_limit)
            .unwrap_or(DEFAULT_RECENT_LIMIT)
    }
}

impl ForecastConfig for TomlConfig {
    fn zone(&self) -> &str {
        &self.simulation.zone
    }

    fn series_len(&self) -> usize {
        self.simulation.series_len.unwrap_or(DEFAULT_SERIES_LEN)
    }

    fn base_density(&self) -> f64 {
        self.simulation.base_density
    }

    fn noise_std(&self) -> f64 {
        self.simulation.noise_std.unwrap_or(DEFAULT_NOISE_STD)
    }

    fn seed(&self) -> Option<u64> {
        self.simulation.seed
    }

    fn steps(&self) -> usize {
        self.forecast
            .as_ref()
            .and_then(|f| f.steps)
            .unwrap_or(DEFAULT_STEPS)
    }

    fn threshold(&self) -> f64 {
        self.risk
            .as_ref()
            .and_then(|r| r.threshold)
            .unwrap_or(DEFAULT_THRESHOLD)
    }

    fn bounds(&self) -> DensityBounds {
        let defaults = DensityBounds::default();
        DensityBounds {
            min: self.simulation.min_density.unwrap_or(defaults.min),
            max: self.simulation.max_density.unwrap_or(defaults.max),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_non_empty_string("simulation.zone", self.zone())?;
        validation::validate_positive_number("simulation.series_len", self.series_len(), 2)?;
        validation::validate_positive_number("forecast.steps", self.steps(), 1)?;
        validation::validate_finite("simulation.base_density", self.base_density())?;
        validation::validate_non_negative("simulation.noise_std", self.noise_std())?;
        let bounds = self.bounds();
        validation::validate_bounds(
            "simulation.min_density",
            bounds.min,
            "simulation.max_density",
            bounds.max,
        )?;
        validation::validate_finite("risk.threshold", self.threshold())?;
        validation::validate_range("risk.threshold", self.threshold(), bounds.min, bounds.max)?;
        validation::validate_non_empty_string("alerts.path", self.alert_log_path())?;
        Ok(())
    }
}
