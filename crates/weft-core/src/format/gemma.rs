use weft_abi::{ChatMessage, FormattedPrompt, Role};

use crate::format::strategy::PromptStrategy;

const USER_TURN: &str = "<start_of_turn>user\n";
const MODEL_TURN: &str = "<start_of_turn>model\n";
const END_TOKEN: &str = "<end_of_turn>";
const SEPARATOR: &str = "<end_of_turn>\n";

/// Gemma dialect. The assistant is called `model`; system, tool, and
/// function messages are dropped entirely.
pub struct GemmaFormatter;

impl PromptStrategy for GemmaFormatter {
    fn format(&self, messages: &[ChatMessage]) -> FormattedPrompt {
        let mut prompt = String::new();
        for msg in messages {
            let marker = match msg.role {
                Role::User => USER_TURN,
                Role::Assistant => MODEL_TURN,
                Role::System | Role::Tool | Role::Function => continue,
            };
            prompt.push_str(marker);
            prompt.push_str(msg.content.as_text());
            prompt.push_str(SEPARATOR);
        }

        // Bare model turn, no separator after it: generation continues here.
        prompt.push_str(MODEL_TURN);
        FormattedPrompt::with_stop(prompt, END_TOKEN)
    }
}
