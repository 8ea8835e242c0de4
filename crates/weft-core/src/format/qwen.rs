use weft_abi::{ChatMessage, FormattedPrompt, Role};

use crate::format::strategy::PromptStrategy;

const SYSTEM_BLOCK: &str = "<|im_start|>system\nYou are a helpful assistant.";
const USER_MARKER: &str = "<|im_start|>user";
const ASSISTANT_MARKER: &str = "<|im_start|>assistant";
const SEPARATOR: &str = "<|im_end|>\n";
const END_TOKEN: &str = "<|endoftext|>";

/// ChatML dialect as Qwen ships it.
///
/// Always renders the fixed default system block and drops caller-supplied
/// system messages — upstream behavior preserved deliberately rather than
/// merged; see DESIGN.md. Tool and function messages are dropped too.
pub struct QwenFormatter;

impl PromptStrategy for QwenFormatter {
    fn format(&self, messages: &[ChatMessage]) -> FormattedPrompt {
        let mut prompt = String::from(SYSTEM_BLOCK);
        prompt.push_str(SEPARATOR);
        for msg in messages {
            let marker = match msg.role {
                Role::User => USER_MARKER,
                Role::Assistant => ASSISTANT_MARKER,
                Role::System | Role::Tool | Role::Function => continue,
            };
            prompt.push_str(marker);
            prompt.push('\n');
            prompt.push_str(msg.content.as_text());
            prompt.push_str(SEPARATOR);
        }

        prompt.push_str(ASSISTANT_MARKER);
        prompt.push('\n');
        FormattedPrompt::with_stop(prompt, END_TOKEN)
    }
}
