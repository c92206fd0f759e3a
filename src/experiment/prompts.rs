//! Prompt construction for the NL-to-UML experiments.
//!
//! Three strategies, all plain string/list assembly: completion prompts with
//! `###`-separated shots, chat prompts with user/assistant example turns and
//! a chain-of-thought variant whose shots carry no solutions.

use super::DatasetRecord;
use crate::constants::{PROBLEM_STATEMENT, SHOT_SEPARATOR, TASK_DESCRIPTION};
use crate::llm::ChatMessage;
use serde::Serialize;

/// Payload handed to the provider: a single prompt string or a chat history.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PromptPayload {
    Completion(String),
    Chat(Vec<ChatMessage>),
}

/// A prompt ready to run, tagged with the dataset row it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentPrompt {
    pub name: String,
    pub description: String,
    pub payload: PromptPayload,
}

/// Builds plain completion prompts.
///
/// With shots the header lists each example as
/// `Description: ... / classes / Relationships: ... / ###`; without shots it
/// falls back to the task format instructions.
pub fn completion_prompts(
    shots: &[DatasetRecord],
    evals: &[DatasetRecord],
) -> Vec<ExperimentPrompt> {
    let header = if shots.is_empty() {
        format!("{}\n{}", PROBLEM_STATEMENT, TASK_DESCRIPTION)
    } else {
        let shot_blocks: Vec<String> = shots
            .iter()
            .map(|shot| {
                format!(
                    "Description: {}\n\n{}\nRelationships:\n{}\n{}",
                    shot.description, shot.classes, shot.associations, SHOT_SEPARATOR
                )
            })
            .collect();
        format!("{}\n{}", PROBLEM_STATEMENT, shot_blocks.join("\n"))
    };

    evals
        .iter()
        .map(|record| ExperimentPrompt {
            name: record.name.clone(),
            description: record.description.clone(),
            payload: PromptPayload::Completion(format!(
                "{}\nDescription: {}\n",
                header, record.description
            )),
        })
        .collect()
}

/// Builds chat prompts: the problem statement as the system turn, one
/// user/assistant pair per shot, then the evaluation description as the final
/// user turn.
pub fn chat_prompts(shots: &[DatasetRecord], evals: &[DatasetRecord]) -> Vec<ExperimentPrompt> {
    build_chat_prompts(shots, evals, true)
}

/// Chain-of-thought variant of [`chat_prompts`]: shots contribute only their
/// description turn, no assistant solution.
pub fn chat_prompts_cot(shots: &[DatasetRecord], evals: &[DatasetRecord]) -> Vec<ExperimentPrompt> {
    build_chat_prompts(shots, evals, false)
}

fn build_chat_prompts(
    shots: &[DatasetRecord],
    evals: &[DatasetRecord],
    with_solutions: bool,
) -> Vec<ExperimentPrompt> {
    let mut preamble = vec![ChatMessage::system(PROBLEM_STATEMENT)];

    if shots.is_empty() {
        preamble.push(ChatMessage::user(TASK_DESCRIPTION));
    } else {
        for shot in shots {
            preamble.push(ChatMessage::user(&format!(
                "Description: {}\n",
                shot.description
            )));
            if with_solutions {
                preamble.push(ChatMessage::assistant(&format!(
                    "{} \n\n  Relationships:\n{}\n\n",
                    shot.classes, shot.associations
                )));
            }
        }
    }

    evals
        .iter()
        .map(|record| {
            let mut messages = preamble.clone();
            messages.push(ChatMessage::user(&record.description));
            ExperimentPrompt {
                name: record.name.clone(),
                description: record.description.clone(),
                payload: PromptPayload::Chat(messages),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, description: &str) -> DatasetRecord {
        DatasetRecord {
            name: name.to_string(),
            description: description.to_string(),
            classes: "Classes:\nLibrary(String name)".to_string(),
            associations: "1 Library contain 0..* Book".to_string(),
        }
    }

    #[test]
    fn zero_shot_completion_uses_task_description() {
        let prompts = completion_prompts(&[], &[record("lib", "a library")]);
        assert_eq!(prompts.len(), 1);
        let PromptPayload::Completion(text) = &prompts[0].payload else {
            panic!("expected a completion payload");
        };
        assert!(text.starts_with(PROBLEM_STATEMENT));
        assert!(text.contains(TASK_DESCRIPTION));
        assert!(text.ends_with("Description: a library\n"));
        assert!(!text.contains(SHOT_SEPARATOR));
    }

    #[test]
    fn few_shot_completion_includes_separated_examples() {
        let shots = vec![record("s1", "a school"), record("s2", "a shop")];
        let prompts = completion_prompts(&shots, &[record("lib", "a library")]);
        let PromptPayload::Completion(text) = &prompts[0].payload else {
            panic!("expected a completion payload");
        };
        assert_eq!(text.matches(SHOT_SEPARATOR).count(), 2);
        assert!(text.contains("Description: a school"));
        assert!(text.contains("Relationships:\n1 Library contain 0..* Book"));
        assert!(!text.contains(TASK_DESCRIPTION));
        assert!(text.ends_with("Description: a library\n"));
    }

    #[test]
    fn chat_prompts_pair_shots_with_solutions() {
        let shots = vec![record("s1", "a school")];
        let prompts = chat_prompts(&shots, &[record("lib", "a library")]);
        let PromptPayload::Chat(messages) = &prompts[0].payload else {
            panic!("expected a chat payload");
        };
        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(messages[0].content, PROBLEM_STATEMENT);
        assert!(messages[2].content.contains("Relationships:"));
        assert_eq!(messages[3].content, "a library");
    }

    #[test]
    fn cot_chat_prompts_drop_shot_solutions() {
        let shots = vec![record("s1", "a school")];
        let prompts = chat_prompts_cot(&shots, &[record("lib", "a library")]);
        let PromptPayload::Chat(messages) = &prompts[0].payload else {
            panic!("expected a chat payload");
        };
        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "user"]);
    }

    #[test]
    fn zero_shot_chat_prompts_use_task_description() {
        let prompts = chat_prompts(&[], &[record("lib", "a library")]);
        let PromptPayload::Chat(messages) = &prompts[0].payload else {
            panic!("expected a chat payload");
        };
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, TASK_DESCRIPTION);
    }

    #[test]
    fn one_prompt_per_eval_row() {
        let evals = vec![record("a", "d1"), record("b", "d2"), record("c", "d3")];
        assert_eq!(completion_prompts(&[], &evals).len(), 3);
        assert_eq!(chat_prompts(&[], &evals).len(), 3);
    }
}
