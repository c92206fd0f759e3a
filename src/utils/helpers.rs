/// Strips an optional Markdown code fence from an LLM reply.
///
/// Models frequently wrap JSON answers in ```json ... ``` blocks even when
/// told not to. Returns the inner content when a fence is found, otherwise
/// the trimmed input unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence line.
    match inner.split_once('\n') {
        Some((first, body)) if !first.trim().is_empty() && !first.trim().contains(' ') => {
            body.trim()
        }
        _ => inner.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn strips_fence_with_language_tag() {
        assert_eq!(
            strip_code_fence("```json\n{\"action\": \"validate_model\"}\n```"),
            "{\"action\": \"validate_model\"}"
        );
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn keeps_unterminated_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "```json\n{\"a\": 1}");
    }
}
