use weft_abi::{ChatMessage, FormattedPrompt, MessageContent, Role};

use crate::format::strategy::PromptStrategy;

const CONVERSATION_START: &str = "<s>";
const INSTRUCT_START: &str = "[INST] ";
const INSTRUCT_END: &str = " [/INST] ";
const END_TOKEN: &str = "</s>";

/// Mistral-instruct `[INST]` dialect. `<s>` opens the conversation once.
/// Image content contributes nothing to the prompt text; system, tool, and
/// function messages are dropped.
pub struct MistralFormatter;

impl PromptStrategy for MistralFormatter {
    fn format(&self, messages: &[ChatMessage]) -> FormattedPrompt {
        let mut prompt = String::from(CONVERSATION_START);
        for msg in messages {
            match (msg.role, &msg.content) {
                (Role::User, MessageContent::Text(text)) => {
                    prompt.push_str(INSTRUCT_START);
                    prompt.push_str(text);
                }
                // Images go to the backend out-of-band, not into the text.
                (Role::User, MessageContent::Image(_)) => {}
                (Role::Assistant, content) => {
                    prompt.push_str(INSTRUCT_END);
                    prompt.push_str(content.as_text());
                    prompt.push_str(END_TOKEN);
                }
                _ => {}
            }
        }

        // Still waiting on the model if the dialog ends with the user.
        if matches!(messages.last().map(|m| m.role), Some(Role::User)) {
            prompt.push_str(INSTRUCT_END);
        }

        FormattedPrompt::with_stop(prompt, END_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_user_turn_awaits_reply() {
        let out = MistralFormatter.format(&[ChatMessage::user("hello")]);
        assert_eq!(out.text, "<s>[INST] hello [/INST] ");
        assert_eq!(out.stop_sequences, vec!["</s>".to_string()]);
    }

    #[test]
    fn completed_exchange_closes_with_end_token() {
        let msgs = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi there"),
        ];
        let out = MistralFormatter.format(&msgs);
        assert_eq!(out.text, "<s>[INST] hello [/INST] hi there</s>");
    }

    #[test]
    fn image_content_is_skipped_but_still_invites_a_reply() {
        let msgs = vec![ChatMessage::user_image(
            "file:///cat.png",
            Some("a cat".into()),
        )];
        let out = MistralFormatter.format(&msgs);
        assert_eq!(out.text, "<s> [/INST] ");
        assert!(!out.text.contains("a cat"));
    }

    #[test]
    fn system_tool_function_are_dropped() {
        let msgs = vec![
            ChatMessage::system("sys"),
            ChatMessage::tool("tool out"),
            ChatMessage::function("fn out"),
        ];
        let out = MistralFormatter.format(&msgs);
        assert_eq!(out.text, "<s>");
    }
}
