mod decision;

pub use decision::*;

use crate::constants::{DECISION_FORMAT_REMINDER, DECISION_SYSTEM_PROMPT, MAX_DECISION_RETRIES};
use crate::errors::Result;
use crate::llm::{ChatMessage, LlmClient};
use crate::plantuml::{validate_model, RenderClient};
use crate::uml::{generate, parse_class_model, TargetLanguage};
use colored::*;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Inputs for one assistant run, resolved from the CLI.
pub struct AssistantOptions {
    /// Free-form user request guiding the action choice
    pub request: String,
    /// Path to the PlantUML source file
    pub model_file: PathBuf,
    pub llm_provider: String,
    pub llm_model: String,
    /// Explicit PlantUML server, overriding env/default resolution
    pub plantuml_server: Option<String>,
    /// Target language override; wins over the LLM's choice
    pub language: Option<TargetLanguage>,
    /// Destination file for generated code; stdout when absent
    pub out: Option<PathBuf>,
}

/// Runs the assistant loop on one PlantUML model: ask the LLM to pick an
/// action, then execute it.
pub async fn run_assistant(opts: &AssistantOptions) -> Result<()> {
    let source = fs::read_to_string(&opts.model_file)?;
    let client = LlmClient::new(&opts.llm_provider, &opts.llm_model)?;

    let action = decide(&client, &opts.request, &source).await?;
    info!("Agent decision: {:?}", action);

    match action {
        AgentAction::ValidateModel => {
            let renderer = RenderClient::new(opts.plantuml_server.as_deref())?;
            let report = validate_model(&source, &renderer).await?;
            if report.is_valid() {
                println!("{} {}", "✅".green(), report.message);
            } else {
                println!("{} {}", "✗".red().bold(), report.message);
            }
        }
        AgentAction::GenerateCode { language } => {
            let model = parse_class_model(&source);
            if model.classes.is_empty() {
                warn!(
                    "No classes found in {}, generated output will be empty",
                    opts.model_file.display()
                );
            }
            let language = opts.language.unwrap_or(language);
            let code = generate(&model, language);
            match &opts.out {
                Some(path) => {
                    fs::write(path, &code)?;
                    println!(
                        "{} Generated {} skeleton for {} classes in {}",
                        "✅".green(),
                        language,
                        model.classes.len(),
                        path.display().to_string().bold()
                    );
                }
                None => println!("{}", code),
            }
        }
    }

    Ok(())
}

/// Asks the LLM for an action decision, retrying with a format reminder when
/// the reply does not match the decision schema.
async fn decide(client: &LlmClient, request: &str, source: &str) -> Result<AgentAction> {
    let mut messages = vec![
        ChatMessage::system(DECISION_SYSTEM_PROMPT),
        ChatMessage::user(&format!(
            "Request:\n{}\n\nPlantUML model:\n{}",
            request, source
        )),
    ];

    let response = client
        .call_chat_with_format_check(
            &mut messages,
            is_well_formed,
            DECISION_FORMAT_REMINDER,
            MAX_DECISION_RETRIES,
        )
        .await?;

    parse_decision(&response)
}
