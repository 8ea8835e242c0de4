//! JSON boundary for chat messages.
//!
//! Everything that can go wrong with caller-supplied message data fails
//! here; the formatters downstream assume well-formed input and never error.

use weft_abi::ChatMessage;

use crate::errors::Result;

/// Decode a single message. A content value the decoder cannot classify
/// (neither a string nor an image object) surfaces as [`crate::PromptError::Decode`].
pub fn message_from_json(json: &str) -> Result<ChatMessage> {
    Ok(serde_json::from_str(json)?)
}

/// Decode an ordered message array. Order in the JSON array is the turn order.
pub fn messages_from_json(json: &str) -> Result<Vec<ChatMessage>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_abi::{MessageContent, Role};

    #[test]
    fn decodes_a_mixed_dialog() {
        let msgs = messages_from_json(
            r#"[
                {"role":"system","content":"You are terse."},
                {"role":"user","content":{"url":"file:///cat.png","detail":"a cat"}},
                {"role":"assistant","content":"A cat indeed."}
            ]"#,
        )
        .unwrap();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0].role, Role::System);
        assert!(msgs[1].content.is_image());
        assert_eq!(msgs[2].content, MessageContent::Text("A cat indeed.".into()));
    }

    #[test]
    fn unclassifiable_content_is_an_error() {
        let err = message_from_json(r#"{"role":"user","content":["not","a","message"]}"#)
            .unwrap_err();
        assert!(matches!(err, crate::PromptError::Decode(_)));
    }
}
