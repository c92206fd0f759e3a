/// Problem statement shared by every prompting strategy.
pub const PROBLEM_STATEMENT: &str =
    "Generate the lists of model classes and associations from a given description.";

/// Task instructions used by the zero-shot strategies. The format mirrors the
/// answer layout expected from the model: enumerations, classes, then
/// relationships with their multiplicities.
pub const TASK_DESCRIPTION: &str = "Create a class diagram for the following description by giving the enumerations, classes, and relationships using format:
Enumerations:
enumerationName(literals)
(there might be no or multiple enumerations)

Class:
className(attributeType attributeName (there might be multiple attributes))
(there might be multiple classes)

Relationships
mul1 class1 associate mul2 class2 (class1 and class2 are classes above. mul1 and mul2 are one of the following options[0..*, 1, 0..1, 1..*])
(there might be multiple associations)

class1 inherit class2 (class1 and class2 are classes above)
(there might be multiple inheritance)

mul1 class1 contain mul2 class2 (class1 and class2 are classes above. mul1 and mul2 are one of the following options[0..*, 1, 0..1, 1..*])
(there might be multiple composition)
";

/// Separator appended after each in-context example in completion prompts.
pub const SHOT_SEPARATOR: &str = "###";

/// System prompt for the assistant's action decision. The action vocabulary is
/// closed: the model picks one of the two entries and answers with JSON only.
pub const DECISION_SYSTEM_PROMPT: &str = "You are an assistant for working with PlantUML class models. \
Given a user request and a PlantUML model, choose exactly one of the following actions:
- \"validate_model\": check that the model is well-formed and renders on a PlantUML server.
- \"generate_code\": generate skeletal class code from the model. Supported languages: \"python\", \"java\".

Answer with a single JSON object and nothing else, for example:
{\"action\": \"validate_model\"}
{\"action\": \"generate_code\", \"language\": \"python\"}";

/// Format reminder injected when the decision reply does not parse.
pub const DECISION_FORMAT_REMINDER: &str = "Your answer must be a single JSON object, \
either {\"action\": \"validate_model\"} or {\"action\": \"generate_code\", \"language\": \"python\" | \"java\"}. \
No prose, no extra keys.";

/// Maximum number of format-check retries for the decision call.
pub const MAX_DECISION_RETRIES: usize = 2;

/// Default base URL of the local Ollama daemon.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default base URL of the OpenAI API.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default public PlantUML rendering server.
pub const DEFAULT_PLANTUML_SERVER: &str = "https://www.plantuml.com/plantuml";
