//! Prompt assembly for summary generation

use aisummary_common::DEFAULT_PROMPT;

/// Fixed system instruction sent with every summary request
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates concise summaries of text content.";

/// System/user message pair for a chat request
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    /// System instruction
    pub system: String,

    /// User message (instruction + length clause + text)
    pub user: String,
}

/// Build the summary prompt from the configured instruction, the length
/// envelope, and the sanitized text
///
/// An empty template falls back to the built-in default instruction.
/// Pure function: deterministic, no side effects.
pub fn summary_prompt(
    template: &str,
    min_length: usize,
    max_length: usize,
    text: &str,
) -> ChatPrompt {
    let instruction = if template.trim().is_empty() {
        DEFAULT_PROMPT
    } else {
        template
    };

    let user = format!(
        "{} The summary should be between {} and {} characters long:\n\n{}",
        instruction, min_length, max_length, text
    );

    ChatPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_both_bounds() {
        let prompt = summary_prompt("Summarize this.", 50, 150, "Some article text.");
        assert!(prompt.user.contains("between 50 and 150 characters"));
    }

    #[test]
    fn test_text_follows_instruction() {
        let prompt = summary_prompt("Summarize this.", 50, 150, "Some article text.");
        let clause_pos = prompt.user.find("characters long:").unwrap();
        let text_pos = prompt.user.find("Some article text.").unwrap();
        assert!(clause_pos < text_pos);
        assert!(prompt.user.contains(":\n\nSome article text."));
    }

    #[test]
    fn test_fixed_system_prompt() {
        let prompt = summary_prompt("Summarize this.", 10, 20, "x");
        assert_eq!(prompt.system, SYSTEM_PROMPT);
    }

    #[test]
    fn test_empty_template_falls_back() {
        let prompt = summary_prompt("  ", 50, 150, "x");
        assert!(prompt.user.starts_with(DEFAULT_PROMPT));
    }

    #[test]
    fn test_custom_template_used() {
        let prompt = summary_prompt("Fasse den Text zusammen.", 50, 150, "x");
        assert!(prompt.user.starts_with("Fasse den Text zusammen."));
    }
}
