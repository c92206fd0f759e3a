use super::encode_source;
use crate::constants::DEFAULT_PLANTUML_SERVER;
use crate::errors::{Error, Result};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

/// Client for a remote PlantUML rendering server.
#[derive(Debug, Clone)]
pub struct RenderClient {
    server_url: String,
}

impl RenderClient {
    /// Creates a render client.
    ///
    /// The server URL is resolved from the explicit argument, then the
    /// `PLANTUML_SERVER` environment variable, then the public server.
    pub fn new(server_url: Option<&str>) -> Result<Self> {
        let resolved = match server_url {
            Some(s) => s.to_string(),
            None => std::env::var("PLANTUML_SERVER")
                .unwrap_or_else(|_| DEFAULT_PLANTUML_SERVER.to_string()),
        };
        Url::parse(&resolved)
            .map_err(|e| Error::Config(format!("Invalid PlantUML server URL '{}': {}", resolved, e)))?;
        Ok(RenderClient {
            server_url: resolved.trim_end_matches('/').to_string(),
        })
    }

    /// Asks the server to render the source as SVG and returns the HTTP
    /// status together with the response body.
    pub async fn render_check(&self, source: &str) -> Result<(StatusCode, String)> {
        let encoded = encode_source(source)?;
        let url = format!("{}/svg/{}", self.server_url, encoded);
        debug!("GET {}", url);

        let res = reqwest::Client::new().get(&url).send().await?;
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        Ok((status, body))
    }
}

/// Outcome of validating one PlantUML source text.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Source starts with @startuml and ends with @enduml.
    pub structure_ok: bool,
    /// Remote render succeeded; None when the structural check already failed.
    pub remote_ok: Option<bool>,
    pub message: String,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.structure_ok && self.remote_ok == Some(true)
    }
}

/// Validates a PlantUML model: a structural prefix/suffix check followed by a
/// render round-trip against the configured server.
///
/// The structural check short-circuits so malformed sources never hit the
/// network.
pub async fn validate_model(source: &str, renderer: &RenderClient) -> Result<ValidationReport> {
    let trimmed = source.trim();
    if !trimmed.starts_with("@startuml") || !trimmed.ends_with("@enduml") {
        return Ok(ValidationReport {
            structure_ok: false,
            remote_ok: None,
            message: "Model must start with @startuml and end with @enduml".to_string(),
        });
    }

    let (status, body) = renderer.render_check(trimmed).await?;
    if status.is_success() {
        info!("PlantUML server accepted the model ({})", status);
        Ok(ValidationReport {
            structure_ok: true,
            remote_ok: Some(true),
            message: format!("Server rendered the model ({})", status),
        })
    } else {
        let reason = body.lines().next().unwrap_or("").trim().to_string();
        Ok(ValidationReport {
            structure_ok: true,
            remote_ok: Some(false),
            message: format!("Server rejected the model ({}): {}", status, reason),
        })
    }
}
