use weft_abi::{ChatMessage, FormattedPrompt, Role};

use crate::format::strategy::PromptStrategy;

const BEGIN_OF_TEXT: &str = "<|begin_of_text|>";
const END_TOKEN: &str = "<|eot_id|>";

fn header(role: Role) -> String {
    format!("<|start_header_id|>{}<|end_header_id|>\n\n", role.as_str())
}

/// Llama-3 instruct dialect: every message, whatever its role, gets a
/// header block and an `<|eot_id|>` terminator. A trailing empty assistant
/// header invites the next turn and is left untrimmed so the prompt ends
/// exactly where the reply starts.
pub struct Llama3Formatter;

impl PromptStrategy for Llama3Formatter {
    fn format(&self, messages: &[ChatMessage]) -> FormattedPrompt {
        let mut prompt = String::from(BEGIN_OF_TEXT);
        for msg in messages {
            prompt.push_str(&header(msg.role));
            prompt.push_str(msg.content.as_text().trim());
            prompt.push_str(END_TOKEN);
        }
        prompt.push_str(&header(Role::Assistant));
        FormattedPrompt::with_stop(prompt, END_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_each_message_in_header_blocks() {
        let msgs = vec![ChatMessage::user("Hello")];
        let out = Llama3Formatter.format(&msgs);
        assert!(out.text.starts_with(
            "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\nHello<|eot_id|>"
        ));
        assert!(
            out.text
                .ends_with("<|start_header_id|>assistant<|end_header_id|>\n\n")
        );
        assert_eq!(out.stop_sequences, vec!["<|eot_id|>".to_string()]);
    }

    #[test]
    fn every_role_gets_its_own_header() {
        let msgs = vec![
            ChatMessage::system("sys"),
            ChatMessage::user("q"),
            ChatMessage::assistant("a"),
            ChatMessage::tool("t"),
            ChatMessage::function("f"),
        ];
        let out = Llama3Formatter.format(&msgs);
        for role in ["system", "user", "assistant", "tool", "function"] {
            assert!(
                out.text
                    .contains(&format!("<|start_header_id|>{role}<|end_header_id|>")),
                "missing header for {role}"
            );
        }
    }

    #[test]
    fn content_is_trimmed_inside_the_block() {
        let msgs = vec![ChatMessage::user("  padded  ")];
        let out = Llama3Formatter.format(&msgs);
        assert!(out.text.contains("\n\npadded<|eot_id|>"));
    }
}
