use crate::errors::{Error, Result};
use crate::uml::TargetLanguage;
use crate::utils::strip_code_fence;
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Action chosen by the LLM. The vocabulary is closed: exactly these two
/// entries exist, anything else is a format error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentAction {
    ValidateModel,
    GenerateCode { language: TargetLanguage },
}

/// JSON Schema the decision reply must satisfy.
const DECISION_SCHEMA: &str = r#"{
    "type": "object",
    "properties": {
        "action": {"enum": ["validate_model", "generate_code"]},
        "language": {"enum": ["python", "java"]}
    },
    "required": ["action"],
    "additionalProperties": false
}"#;

static DECISION_VALIDATOR: Lazy<Validator> = Lazy::new(|| {
    let schema = serde_json::from_str(DECISION_SCHEMA).expect("decision schema is valid JSON");
    jsonschema::validator_for(&schema).expect("decision schema compiles")
});

#[derive(Debug, Deserialize)]
struct DecisionPayload {
    action: String,
    language: Option<TargetLanguage>,
}

/// Returns true when the reply parses as a schema-valid decision. Used as the
/// format check for the retry loop.
pub fn is_well_formed(response: &str) -> bool {
    parse_decision(response).is_ok()
}

/// Parses the LLM reply into an [`AgentAction`].
///
/// The reply may be wrapped in a Markdown code fence. It is first validated
/// against the decision schema, then mapped onto the action enum. Code
/// generation without an explicit language defaults to Python.
pub fn parse_decision(response: &str) -> Result<AgentAction> {
    let cleaned = strip_code_fence(response);
    let value: serde_json::Value = serde_json::from_str(cleaned)
        .map_err(|e| Error::Agent(format!("Decision is not valid JSON: {}", e)))?;

    if !DECISION_VALIDATOR.is_valid(&value) {
        return Err(Error::Agent(format!(
            "Decision does not match the action schema: {}",
            value
        )));
    }

    let payload: DecisionPayload = serde_json::from_value(value)?;
    match payload.action.as_str() {
        "validate_model" => Ok(AgentAction::ValidateModel),
        "generate_code" => Ok(AgentAction::GenerateCode {
            language: payload.language.unwrap_or(TargetLanguage::Python),
        }),
        other => Err(Error::Agent(format!("Unknown action '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_action() {
        let action = parse_decision(r#"{"action": "validate_model"}"#).unwrap();
        assert_eq!(action, AgentAction::ValidateModel);
    }

    #[test]
    fn parses_generate_action_with_language() {
        let action =
            parse_decision(r#"{"action": "generate_code", "language": "java"}"#).unwrap();
        assert_eq!(
            action,
            AgentAction::GenerateCode {
                language: TargetLanguage::Java
            }
        );
    }

    #[test]
    fn generate_without_language_defaults_to_python() {
        let action = parse_decision(r#"{"action": "generate_code"}"#).unwrap();
        assert_eq!(
            action,
            AgentAction::GenerateCode {
                language: TargetLanguage::Python
            }
        );
    }

    #[test]
    fn accepts_fenced_json() {
        let action =
            parse_decision("```json\n{\"action\": \"validate_model\"}\n```").unwrap();
        assert_eq!(action, AgentAction::ValidateModel);
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(parse_decision(r#"{"action": "delete_everything"}"#).is_err());
    }

    #[test]
    fn rejects_extra_keys() {
        assert!(parse_decision(r#"{"action": "validate_model", "note": "hi"}"#).is_err());
    }

    #[test]
    fn rejects_prose() {
        assert!(parse_decision("I would validate the model.").is_err());
        assert!(!is_well_formed("I would validate the model."));
    }
}
