use crate::uml::TargetLanguage;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line interface for the application
#[derive(Parser)]
#[command(name = "modelsmith", about = "LLM-assisted PlantUML modeling tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    #[arg(long, global = true, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to daily rotating files under logs/
    #[arg(long, global = true)]
    pub log_to_file: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Let the LLM pick and run an action on a PlantUML model
    Agent {
        /// What to do with the model, in natural language
        #[arg(short, long)]
        request: String,

        /// Path to the PlantUML source file
        #[arg(short, long)]
        model_file: PathBuf,

        /// LLM provider ("ollama" or "openai")
        #[arg(long, default_value = "ollama")]
        llm_provider: String,

        /// Model identifier passed to the provider
        #[arg(long, default_value = "llama3.2")]
        llm_model: String,

        /// PlantUML rendering server used for validation
        #[arg(long)]
        plantuml_server: Option<String>,

        /// Force the code generation target language
        #[arg(long, value_enum)]
        language: Option<TargetLanguage>,

        /// Write generated code to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Run a prompting experiment described by a YAML configuration
    Experiment {
        /// Path to the experiment configuration file
        #[arg(short, long)]
        config: String,
    },
}
