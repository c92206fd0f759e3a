mod parser;
use crate::llm::SamplingParams;
use serde::{Deserialize, Serialize};

pub use parser::load_experiment_config;

/// Main configuration structure for an experiment run
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ExperimentConfig {
    /// LLM provider and model selection
    #[serde(default)]
    pub llm: LlmConfig,
    /// Prompting strategy and sampling parameters
    #[serde(default)]
    pub running_params: RunningParams,
    /// Dataset input and output locations
    #[serde(default)]
    pub input_output: InputOutputConfig,
    /// Tracking server configuration
    #[serde(default)]
    pub tracking: TrackingConfig,
}

/// LLM provider and model selection
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    /// Name of the provider ("ollama" or "openai")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,
}

/// Prompting strategy and sampling parameters
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RunningParams {
    /// Dataset row names used as in-context examples
    #[serde(default)]
    pub shots: Vec<String>,
    /// Use chat messages instead of a plain completion prompt
    #[serde(default)]
    pub chat: bool,
    /// Chain-of-thought variant of the chat prompts
    #[serde(default)]
    pub cot: bool,
    /// Sampling parameters forwarded to the provider
    #[serde(flatten)]
    pub sampling: SamplingParams,
}

/// Dataset input and output locations
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InputOutputConfig {
    /// Path to the CSV dataset
    #[serde(default = "default_csv")]
    pub csv: String,
    /// Folder receiving one JSON file per response
    #[serde(default = "default_output_folder")]
    pub output_folder: String,
}

/// Tracking server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrackingConfig {
    /// Whether to report the run after saving outputs
    #[serde(default)]
    pub activate: bool,
    /// Base URL of the tracking server
    #[serde(default = "default_tracking_url")]
    pub base_url: String,
    /// Project name recorded with the run
    #[serde(default = "default_project")]
    pub project: String,
    /// Entity (team or user) recorded with the run
    #[serde(default = "default_entity")]
    pub entity: String,
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_csv() -> String {
    "data/dataset.csv".to_string()
}

fn default_output_folder() -> String {
    "outputs".to_string()
}

fn default_tracking_url() -> String {
    "http://localhost:8839".to_string()
}

fn default_project() -> String {
    "nl2uml".to_string()
}

fn default_entity() -> String {
    "modelsmith".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            provider: default_provider(),
            model: default_model(),
        }
    }
}

impl Default for InputOutputConfig {
    fn default() -> Self {
        InputOutputConfig {
            csv: default_csv(),
            output_folder: default_output_folder(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig {
            activate: false,
            base_url: default_tracking_url(),
            project: default_project(),
            entity: default_entity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
llm:
  provider: openai
  model: gpt-3.5-turbo
running_params:
  shots: [library, school]
  chat: true
  cot: true
  temperature: 0.2
  max_tokens: 256
input_output:
  csv: data/uml.csv
  output_folder: results
tracking:
  activate: true
  project: thesis
"#;
        let config: ExperimentConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.running_params.shots.len(), 2);
        assert!(config.running_params.chat);
        assert!(config.running_params.cot);
        assert!((config.running_params.sampling.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.running_params.sampling.max_tokens, 256);
        // Unset sampling fields fall back to their defaults.
        assert!((config.running_params.sampling.top_p - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.input_output.output_folder, "results");
        assert!(config.tracking.activate);
        assert_eq!(config.tracking.project, "thesis");
        assert_eq!(config.tracking.entity, "modelsmith");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: ExperimentConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.llm.provider, "ollama");
        assert_eq!(config.llm.model, "llama3.2");
        assert!(config.running_params.shots.is_empty());
        assert!(!config.running_params.chat);
        assert!((config.running_params.sampling.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.input_output.csv, "data/dataset.csv");
        assert!(!config.tracking.activate);
    }
}
