//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and
//! dispatches to one of the two subcommands: the PlantUML assistant loop or
//! the prompting-experiment runner.

use clap::Parser;
use colored::*;
use modelsmith::cli::{Cli, Command};
use modelsmith::{agent, experiment, utils};
use tracing::{error, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let result = match cli.command {
        Command::Agent {
            request,
            model_file,
            llm_provider,
            llm_model,
            plantuml_server,
            language,
            out,
        } => {
            let opts = agent::AssistantOptions {
                request,
                model_file,
                llm_provider,
                llm_model,
                plantuml_server,
                language,
                out,
            };
            agent::run_assistant(&opts).await
        }
        Command::Experiment { config } => experiment::run(&config).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("{} {}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
