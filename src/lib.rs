pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::JsonlAlertLog;
pub use config::toml_config::TomlConfig;
pub use config::CliConfig;

pub use core::engine::{EvaluationReport, ForecastEngine};
pub use core::pipeline::SimulationPipeline;
pub use domain::model::{
    Alert, DensityBounds, DensitySeries, ForecastWindow, RiskAssessment, RiskTier,
};
pub use domain::ports::{AlertStore, ForecastConfig, RiskPipeline};
pub use utils::error::{ForecastError, Result};
