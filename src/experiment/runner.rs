use super::{
    chat_prompts, chat_prompts_cot, completion_prompts, load_dataset, split_shots, PromptPayload,
    RunOutput,
};
use crate::config::ExperimentConfig;
use crate::errors::Result;
use crate::llm::LlmClient;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Runs inference for every evaluation row of the configured dataset and
/// returns the collected raw outputs.
///
/// The prompting strategy follows `running_params`: plain completion prompts
/// by default, chat prompts when `chat` is set, the chain-of-thought variant
/// when `cot` is also set. A single failed call aborts the run.
pub async fn run_inference(config: &ExperimentConfig) -> Result<Vec<RunOutput>> {
    let records = load_dataset(&config.input_output.csv)?;
    let (shots, evals) = split_shots(records, &config.running_params.shots);
    info!(
        "{} shots, {} evaluation rows, strategy: {}",
        shots.len(),
        evals.len(),
        strategy_name(config)
    );

    let prompts = if config.running_params.chat {
        if config.running_params.cot {
            chat_prompts_cot(&shots, &evals)
        } else {
            chat_prompts(&shots, &evals)
        }
    } else {
        completion_prompts(&shots, &evals)
    };

    let client = LlmClient::new(&config.llm.provider, &config.llm.model)?;
    let params = config.running_params.sampling.clone();

    let bar = ProgressBar::new(prompts.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap(),
    );
    bar.set_message("Inference");

    let started = Instant::now();
    let mut outputs = Vec::with_capacity(prompts.len());
    for prompt in &prompts {
        let generated = match &prompt.payload {
            PromptPayload::Completion(text) => client.complete(text, "", &params).await?,
            PromptPayload::Chat(messages) => client.chat(messages, &params).await?,
        };
        outputs.push(RunOutput::new(prompt, generated, &config.llm.model));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let elapsed = Duration::from_secs(started.elapsed().as_secs());
    info!(
        "Inference over {} prompts finished in {}",
        outputs.len(),
        humantime::format_duration(elapsed)
    );
    Ok(outputs)
}

fn strategy_name(config: &ExperimentConfig) -> &'static str {
    match (config.running_params.chat, config.running_params.cot) {
        (false, _) => "completion",
        (true, false) => "chat",
        (true, true) => "chat-cot",
    }
}
