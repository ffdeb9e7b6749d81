use crate::core::RiskPipeline;
use crate::domain::model::{Alert, DensitySeries, ForecastWindow, RiskAssessment};
use crate::utils::error::Result;

/// Everything one evaluation cycle produced. The series and window are owned
/// transiently; only the alert (if any) outlives the cycle, in the store.
///
/// `alert` carries the emission outcome separately from the computation: a
/// store failure lands here, so the computed probability and tier stay
/// available to the caller.
#[derive(Debug)]
pub struct EvaluationReport {
    pub series: DensitySeries,
    pub forecast: ForecastWindow,
    pub assessment: RiskAssessment,
    pub alert: Result<Option<Alert>>,
}

pub struct ForecastEngine<P: RiskPipeline> {
    pipeline: P,
}

impl<P: RiskPipeline> ForecastEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs observe → forecast → assess → emit in one synchronous pass.
    ///
    /// Computation failures abort the run; an emission failure does not, and
    /// is reported through `EvaluationReport::alert` instead.
    pub async fn run(&self) -> Result<EvaluationReport> {
        tracing::info!("Starting forecast evaluation");

        let series = self.pipeline.observe().await?;
        tracing::info!("Observed {} density readings", series.len());

        let forecast = self.pipeline.forecast(&series)?;
        tracing::info!("Extrapolated {} steps ahead", forecast.len());

        let assessment = self.pipeline.assess(&forecast)?;
        tracing::info!(
            zone = %assessment.zone,
            probability = assessment.probability,
            tier = %assessment.tier,
            "Risk assessed"
        );

        let alert = self.pipeline.emit(&assessment).await;
        if let Err(e) = &alert {
            tracing::error!("Alert emission failed: {}", e);
        }

        Ok(EvaluationReport {
            series,
            forecast,
            assessment,
            alert,
        })
    }
}
