use crate::domain::model::{
    Alert, DensityBounds, DensitySeries, ForecastWindow, RiskAssessment,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence boundary for the append-only alert log. The log is owned by
/// the external store; this crate only appends and reads back by recency.
pub trait AlertStore: Send + Sync {
    fn append(&self, alert: &Alert) -> impl std::future::Future<Output = Result<()>> + Send;
    fn recent(
        &self,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Alert>>> + Send;
}

/// Evaluation parameters threaded explicitly through the pipeline; there is
/// no ambient session state.
pub trait ForecastConfig: Send + Sync {
    fn zone(&self) -> &str;
    fn series_len(&self) -> usize;
    fn base_density(&self) -> f64;
    fn noise_std(&self) -> f64;
    fn seed(&self) -> Option<u64>;
    fn steps(&self) -> usize;
    fn threshold(&self) -> f64;
    fn bounds(&self) -> DensityBounds;
}

/// One evaluation cycle: observe a density series, extrapolate it, grade the
/// risk, and emit an alert when policy requires one. Observation and emission
/// may touch external collaborators; the middle stages are pure.
#[async_trait]
pub trait RiskPipeline: Send + Sync {
    async fn observe(&self) -> Result<DensitySeries>;
    fn forecast(&self, series: &DensitySeries) -> Result<ForecastWindow>;
    fn assess(&self, forecast: &ForecastWindow) -> Result<RiskAssessment>;
    async fn emit(&self, assessment: &RiskAssessment) -> Result<Option<Alert>>;
}
