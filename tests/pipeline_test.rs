use crowd_forecast::core::{risk, trend};
use crowd_forecast::{
    Alert, AlertStore, CliConfig, DensityBounds, DensitySeries, ForecastEngine, ForecastError,
    JsonlAlertLog, Result, RiskTier, SimulationPipeline,
};
use tempfile::TempDir;

fn test_config(zone: &str, base_density: f64, alert_log: String) -> CliConfig {
    CliConfig {
        zone: zone.to_string(),
        series_len: 60,
        base_density,
        noise_std: 0.0,
        seed: Some(42),
        steps: 20,
        threshold: 4.0,
        min_density: 0.2,
        max_density: 5.0,
        alert_log,
        recent_limit: 10,
        config: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_calm_zone_emits_no_alert() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("alerts.jsonl");

    let config = test_config("North Gate", 2.5, log_path.display().to_string());
    let log = JsonlAlertLog::new(&log_path);
    let engine = ForecastEngine::new(SimulationPipeline::new(log.clone(), config));

    let report = engine.run().await.unwrap();

    assert_eq!(report.assessment.probability, 0.0);
    assert_eq!(report.assessment.tier, RiskTier::Low);
    assert!(report.alert.unwrap().is_none());

    // nothing was appended, the log file should not even exist
    assert!(!log_path.exists());
    assert!(log.recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_crowded_zone_emits_high_alert() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("alerts.jsonl");

    // base 4.5 with the built-in upward drift keeps the whole forecast at or
    // above the 4.0 threshold
    let config = test_config("Main Stage", 4.5, log_path.display().to_string());
    let log = JsonlAlertLog::new(&log_path);
    let engine = ForecastEngine::new(SimulationPipeline::new(log.clone(), config));

    let report = engine.run().await.unwrap();

    assert_eq!(report.assessment.probability, 1.0);
    assert_eq!(report.assessment.tier, RiskTier::High);

    let alert = report
        .alert
        .unwrap()
        .expect("high risk must emit an alert");
    assert_eq!(alert.zone, "Main Stage");
    assert_eq!(alert.risk_level, RiskTier::High);

    // exactly one record persisted, readable back by recency
    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("\"risk_level\":\"high\""));

    let recent = log.recent(10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0], alert);
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() {
    let temp_dir = TempDir::new().unwrap();

    let mut reports = Vec::new();
    for name in ["a.jsonl", "b.jsonl"] {
        let log_path = temp_dir.path().join(name);
        let mut config = test_config("East Gate", 2.5, log_path.display().to_string());
        config.noise_std = 0.6;
        let engine = ForecastEngine::new(SimulationPipeline::new(
            JsonlAlertLog::new(&log_path),
            config,
        ));
        reports.push(engine.run().await.unwrap());
    }

    assert_eq!(reports[0].series, reports[1].series);
    assert_eq!(reports[0].forecast, reports[1].forecast);
    assert_eq!(
        reports[0].assessment.probability,
        reports[1].assessment.probability
    );
}

#[tokio::test]
async fn test_constant_series_stays_low_risk() {
    // series = [2.5] * 40, threshold 4.0: flat forecast, zero probability
    let series = DensitySeries::new(vec![2.5; 40], DensityBounds::default()).unwrap();
    let window = trend::forecast(&series, 20).unwrap();
    assert!(window.values().iter().all(|&v| (v - 2.5).abs() < 1e-9));

    let assessment = risk::assess(&window, 4.0, "North Gate").unwrap();
    assert_eq!(assessment.probability, 0.0);
    assert_eq!(assessment.tier, RiskTier::Low);
    assert!(Alert::from_assessment(&assessment).is_none());
}

#[tokio::test]
async fn test_steeply_rising_series_goes_high_risk() {
    // 20 readings rising from 3.9 by 0.1 per step: the extrapolation crosses
    // the threshold for the whole horizon
    let values: Vec<f64> = (0..20).map(|t| 3.9 + 0.1 * t as f64).collect();
    let series = DensitySeries::new(values, DensityBounds::default()).unwrap();
    let window = trend::forecast(&series, 10).unwrap();

    let assessment = risk::assess(&window, 4.0, "West Corridor").unwrap();
    assert!(assessment.probability >= 0.8);
    assert_eq!(assessment.tier, RiskTier::High);

    let alert = Alert::from_assessment(&assessment).unwrap();
    assert_eq!(alert.risk_level.as_str(), "high");
}

struct FailingStore;

impl AlertStore for FailingStore {
    async fn append(&self, _alert: &Alert) -> Result<()> {
        Err(ForecastError::AlertStorage {
            message: "simulated outage".to_string(),
        })
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<Alert>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_store_failure_still_reports_computed_risk() {
    let config = test_config("Main Stage", 4.5, "unused".to_string());
    let engine = ForecastEngine::new(SimulationPipeline::new(FailingStore, config));

    // a dead store must not swallow the computed probability and tier
    let report = engine.run().await.unwrap();
    assert_eq!(report.assessment.probability, 1.0);
    assert_eq!(report.assessment.tier, RiskTier::High);
    assert_eq!(report.forecast.len(), 20);

    let err = report.alert.unwrap_err();
    assert!(err.is_storage());
    assert!(matches!(err, ForecastError::AlertStorage { .. }));
}
