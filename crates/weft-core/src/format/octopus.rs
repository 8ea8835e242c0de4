use weft_abi::{ChatMessage, FormattedPrompt, Role};

use crate::format::strategy::PromptStrategy;

const PREAMBLE: &str = "Below is the query from the users, please call the correct function and generate the parameters to call the function.\n";
const SEPARATOR: &str = "\n\n";

/// Generic-instruct dialect used by the Octopus function-calling models:
/// plain `Query:` / `Response:` turns under a fixed instruction preamble.
///
/// System messages are dropped; tool and function results are carried
/// through under their own markers. The two-newline turn separator doubles
/// as the stop sequence.
pub struct OctopusFormatter;

impl PromptStrategy for OctopusFormatter {
    fn format(&self, messages: &[ChatMessage]) -> FormattedPrompt {
        let mut prompt = String::from(PREAMBLE);
        for msg in messages {
            let marker = match msg.role {
                Role::System => continue,
                Role::User => "Query:",
                Role::Assistant => "Response:",
                Role::Tool => "Tool:",
                Role::Function => "Function:",
            };
            prompt.push_str(marker);
            prompt.push(' ');
            prompt.push_str(msg.content.as_text().trim());
            prompt.push_str(SEPARATOR);
        }

        // Bare marker invites the next assistant turn; the final trim eats
        // the space after it.
        prompt.push_str("Response: ");
        FormattedPrompt::with_stop(prompt.trim(), SEPARATOR)
    }
}
