//! Thin client for an experiment-tracking server.
//!
//! Runs are reported as a single JSON document carrying the run id, the full
//! configuration and the collected outputs. The server side is an opaque HTTP
//! dependency; only the POST contract lives here.

use crate::config::{ExperimentConfig, TrackingConfig};
use crate::errors::{Error, Result};
use crate::experiment::RunOutput;
use reqwest::Client;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TrackingClient {
    base_url: String,
    project: String,
    entity: String,
}

impl TrackingClient {
    pub fn new(config: &TrackingConfig) -> Self {
        TrackingClient {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project: config.project.clone(),
            entity: config.entity.clone(),
        }
    }

    /// Reports a finished run. Non-2xx responses surface the status and body.
    pub async fn log_run(
        &self,
        run_id: &Uuid,
        config: &ExperimentConfig,
        outputs: &[RunOutput],
    ) -> Result<()> {
        let payload = json!({
            "id": run_id,
            "project": self.project,
            "entity": self.entity,
            "config": config,
            "outputs": outputs,
        });

        let res = Client::new()
            .post(format!("{}/api/runs", self.base_url))
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Tracking(format!(
                "Tracking server error {}: {}",
                status, text
            )));
        }

        info!(
            "Logged run {} ({} outputs) to {}",
            run_id,
            outputs.len(),
            self.base_url
        );
        Ok(())
    }
}
