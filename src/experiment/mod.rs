mod dataset;
mod output;
mod prompts;
mod runner;

pub use dataset::*;
pub use output::*;
pub use prompts::*;
pub use runner::*;

use crate::config::load_experiment_config;
use crate::errors::Result;
use crate::tracking::TrackingClient;
use colored::*;
use tracing::info;
use uuid::Uuid;

/// Runs a full experiment from a YAML configuration file: load the dataset,
/// build the prompts, call the LLM for each evaluation row, persist the raw
/// responses and optionally report the run to the tracking server.
pub async fn run(config_path: &str) -> Result<()> {
    let config = load_experiment_config(config_path)?;
    let run_id = Uuid::new_v4();
    info!("Starting experiment run {}", run_id);

    let outputs = run_inference(&config).await?;
    save_outputs(&outputs, &config.input_output.output_folder)?;
    println!(
        "{} {} responses saved to {}",
        "✅".green(),
        outputs.len(),
        config.input_output.output_folder.bold()
    );

    if config.tracking.activate {
        let client = TrackingClient::new(&config.tracking);
        client.log_run(&run_id, &config, &outputs).await?;
        println!("{} Run {} reported to tracking server", "📡".cyan(), run_id);
    }

    Ok(())
}
