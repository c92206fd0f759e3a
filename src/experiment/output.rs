use super::{ExperimentPrompt, PromptPayload};
use crate::errors::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Raw result of one inference call, persisted as-is. No parsing or scoring
/// of the generated text happens here.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub name: String,
    pub description: String,
    pub prompt: PromptPayload,
    pub generated_text: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

impl RunOutput {
    pub fn new(prompt: &ExperimentPrompt, generated_text: String, model: &str) -> Self {
        RunOutput {
            name: prompt.name.clone(),
            description: prompt.description.clone(),
            prompt: prompt.payload.clone(),
            generated_text,
            model: model.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Writes one pretty-printed JSON file per output into `folder`, creating the
/// folder if needed. Files are named `{record name}.json`.
pub fn save_outputs(outputs: &[RunOutput], folder: &str) -> Result<()> {
    fs::create_dir_all(folder)?;
    for output in outputs {
        let path = Path::new(folder).join(format!("{}.json", output.name));
        fs::write(&path, serde_json::to_string_pretty(output)?)?;
    }
    info!("Saved {} outputs to {}", outputs.len(), folder);
    Ok(())
}
