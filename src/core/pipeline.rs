use crate::core::{generator, risk, trend};
use crate::domain::model::{Alert, DensitySeries, ForecastWindow, RiskAssessment};
use crate::domain::ports::{AlertStore, ForecastConfig, RiskPipeline};
use crate::utils::error::{ForecastError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

/// Pipeline that observes a simulated density series and emits alerts into
/// the configured store. An externally-derived series (a vision pipeline, a
/// sensor feed) substitutes by implementing `RiskPipeline` with its own
/// `observe`.
pub struct SimulationPipeline<S: AlertStore, C: ForecastConfig> {
    store: S,
    config: C,
    rng: Mutex<StdRng>,
}

impl<S: AlertStore, C: ForecastConfig> SimulationPipeline<S, C> {
    pub fn new(store: S, config: C) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            store,
            config,
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait::async_trait]
impl<S: AlertStore, C: ForecastConfig> RiskPipeline for SimulationPipeline<S, C> {
    async fn observe(&self) -> Result<DensitySeries> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generator::generate(
            self.config.series_len(),
            self.config.base_density(),
            self.config.noise_std(),
            &mut *rng,
            self.config.bounds(),
        )
    }

    fn forecast(&self, series: &DensitySeries) -> Result<ForecastWindow> {
        trend::forecast(series, self.config.steps())
    }

    fn assess(&self, forecast: &ForecastWindow) -> Result<RiskAssessment> {
        risk::assess(forecast, self.config.threshold(), self.config.zone())
    }

    async fn emit(&self, assessment: &RiskAssessment) -> Result<Option<Alert>> {
        let Some(alert) = Alert::from_assessment(assessment) else {
            tracing::debug!(
                zone = %assessment.zone,
                probability = assessment.probability,
                "Flow normal, no alert emitted"
            );
            return Ok(None);
        };

        // surface store failures distinctly; the risk itself was computed
        self.store
            .append(&alert)
            .await
            .map_err(|e| ForecastError::AlertStorage {
                message: e.to_string(),
            })?;

        tracing::info!(
            zone = %alert.zone,
            risk_level = %alert.risk_level,
            "Alert persisted"
        );
        Ok(Some(alert))
    }
}
