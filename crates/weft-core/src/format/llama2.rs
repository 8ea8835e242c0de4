use weft_abi::{ChatMessage, FormattedPrompt, Role};

use crate::format::strategy::{PromptStrategy, first_system};

const SYS_OPEN: &str = "<<SYS>>\n";
const SYS_CLOSE: &str = "\n<</SYS>>\n\n";
const USER_MARKER: &str = "<s>[INST] ";
const ASSISTANT_MARKER: &str = " [/INST] ";
const END_TOKEN: &str = "</s>";

/// Llama-2 `[INST]` dialect.
///
/// The first system message found anywhere is wrapped in a `<<SYS>>` block
/// and injected into the first user turn only; tool and function messages
/// are dropped. Pairing is positional: after that filtering the dialog is
/// assumed to alternate user/assistant starting with user. Other shapes
/// still render (never panic), but their output is unspecified.
pub struct Llama2Formatter;

impl PromptStrategy for Llama2Formatter {
    fn format(&self, messages: &[ChatMessage]) -> FormattedPrompt {
        let system = first_system(messages).map(|s| format!("{SYS_OPEN}{s}{SYS_CLOSE}"));

        let turns: Vec<&ChatMessage> = messages
            .iter()
            .filter(|m| matches!(m.role, Role::User | Role::Assistant))
            .collect();

        let mut conversations: Vec<String> = Vec::new();
        let mut current = String::new();

        for (i, msg) in turns.iter().enumerate() {
            if i % 2 == 0 {
                // User position: close the previous exchange, open the next block.
                if !current.is_empty() {
                    conversations.push(format!("{current} {END_TOKEN}"));
                }
                current = String::from(USER_MARKER);
                if i == 0 {
                    if let Some(sys) = system.as_deref() {
                        current.push_str(sys);
                    }
                }
                current.push_str(msg.content.as_text());
            } else {
                // Assistant position: completes the open exchange.
                current.push_str(ASSISTANT_MARKER);
                current.push_str(msg.content.as_text());
            }
        }

        if turns.len() % 2 == 1 {
            // Unanswered user turn: invite the reply, no closing token.
            current.push_str(ASSISTANT_MARKER);
            conversations.push(current);
        } else if !current.is_empty() {
            conversations.push(format!("{current}{END_TOKEN}"));
        }

        FormattedPrompt::with_stop(conversations.join("\n"), END_TOKEN)
    }
}
