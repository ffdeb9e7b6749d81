pub mod engine;
pub mod generator;
pub mod pipeline;
pub mod risk;
pub mod trend;

pub use crate::domain::model::{
    Alert, DensityBounds, DensitySeries, ForecastWindow, RiskAssessment, RiskTier,
};
pub use crate::domain::ports::{AlertStore, ForecastConfig, RiskPipeline};
pub use crate::utils::error::Result;
