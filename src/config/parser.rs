use super::ExperimentConfig;
use crate::errors::Result;
use std::fs;

use tracing::info;

/// Loads and parses an experiment configuration from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into an ExperimentConfig
pub fn load_experiment_config(file_path: &str) -> Result<ExperimentConfig> {
    let yaml_str = fs::read_to_string(file_path)?;
    let config: ExperimentConfig = serde_yaml::from_str(&yaml_str)?;
    info!(
        "Loaded experiment configuration: {} / {}",
        config.llm.provider, config.llm.model
    );
    Ok(config)
}
