use clap::Parser;
use crowd_forecast::utils::{logger, validation::Validate};
use crowd_forecast::{
    CliConfig, ForecastConfig, ForecastEngine, JsonlAlertLog, SimulationPipeline, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting crowd-forecast");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            if let Err(e) = config.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            let log = JsonlAlertLog::new(config.alert_log_path());
            let limit = config.recent_limit();
            evaluate(config, log, limit).await
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            let log = JsonlAlertLog::new(cli.alert_log.clone());
            let limit = cli.recent_limit;
            evaluate(cli, log, limit).await
        }
    }
}

async fn evaluate<C: ForecastConfig>(
    config: C,
    log: JsonlAlertLog,
    recent_limit: usize,
) -> anyhow::Result<()> {
    use crowd_forecast::AlertStore;

    let pipeline = SimulationPipeline::new(log.clone(), config);
    let engine = ForecastEngine::new(pipeline);

    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Forecast evaluation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let assessment = &report.assessment;
    println!(
        "Zone {}: p(bottleneck) = {:.2} over the next {} steps — risk {}",
        assessment.zone,
        assessment.probability,
        report.forecast.len(),
        assessment.tier
    );
    match &report.alert {
        Ok(Some(alert)) => println!(
            "⚠️  Alert persisted for {} (risk_level={}, at {})",
            alert.zone, alert.risk_level, alert.prediction_time
        ),
        Ok(None) => println!("Flow normal, no alert emitted"),
        Err(e) => {
            // the risk above was computed; only persistence failed
            eprintln!("❌ Computed risk but could not persist the alert: {}", e);
            std::process::exit(2);
        }
    }

    let recent = log.recent(recent_limit).await?;
    if !recent.is_empty() {
        println!("Recent alerts (newest first):");
        for alert in recent {
            println!(
                "  {} · {} · {}",
                alert.prediction_time, alert.zone, alert.risk_level
            );
        }
    }

    Ok(())
}
