use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the provider APIs.
///
/// Defaults match the experiment configuration defaults so a bare
/// `running_params` section still produces a usable request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingParams {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default)]
    pub frequency_penalty: f64,
    #[serde(default)]
    pub presence_penalty: f64,
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    512
}

fn default_top_p() -> f64 {
    1.0
}

impl Default for SamplingParams {
    fn default() -> Self {
        SamplingParams {
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}
