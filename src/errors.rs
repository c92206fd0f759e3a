/// Crate-wide error type. Every fallible operation funnels into this enum
/// so callers can propagate with `?` and print a single message at the top.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] jsonschema::ValidationError<'static>),
    #[error("LLM provider error: {0}")]
    Provider(String),
    #[error("Tracking error: {0}")]
    Tracking(String),
    #[error("Agent error: {0}")]
    Agent(String),
    #[error("Dataset error: {0}")]
    Dataset(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
