use crate::core::AlertStore;
use crate::domain::model::Alert;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// File-backed alert log: one JSON object per line, append-only. The most
/// recent alert is the last line; `recent` reads back newest-first.
#[derive(Debug, Clone)]
pub struct JsonlAlertLog {
    path: PathBuf,
}

impl JsonlAlertLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AlertStore for JsonlAlertLog {
    async fn append(&self, alert: &Alert) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut line = serde_json::to_string(alert)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Alert>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut alerts = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<std::result::Result<Vec<Alert>, _>>()?;

        alerts.reverse();
        alerts.truncate(limit);
        Ok(alerts)
    }
}
