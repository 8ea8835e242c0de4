use serde::{Deserialize, Serialize};

/// Who spoke a turn. One role per message, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
    Function,
}

impl Role {
    /// Lowercase role name, for templates that render the role textually.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
            Role::Function => "function",
        }
    }
}

/// Reference to an image supplied with a user turn.
///
/// Only the textual surrogate (`detail`, else `url`) ever reaches the prompt;
/// actual image bytes travel to the backend out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Message payload. On the wire a plain JSON string is `Text`;
/// a `{ "url": .., "detail": .. }` object is `Image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Image(ImageRef),
}

impl MessageContent {
    /// Resolve the payload to prompt text: the literal string for `Text`,
    /// the `detail` description (else the url) for `Image`.
    #[inline]
    pub fn as_text(&self) -> &str {
        match self {
            MessageContent::Text(s) => s.as_str(),
            MessageContent::Image(img) => img.detail.as_deref().unwrap_or(img.url.as_str()),
        }
    }

    #[inline]
    pub fn is_image(&self) -> bool {
        matches!(self, MessageContent::Image(_))
    }
}

/// One turn of a conversation. Formatters take these by slice and never
/// mutate them; order within the slice is the turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    #[inline]
    pub fn system<S: Into<String>>(s: S) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(s.into()),
        }
    }

    #[inline]
    pub fn user<S: Into<String>>(s: S) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(s.into()),
        }
    }

    /// User turn carrying an image reference with an optional description.
    #[inline]
    pub fn user_image<U: Into<String>>(url: U, detail: Option<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Image(ImageRef {
                url: url.into(),
                detail,
            }),
        }
    }

    #[inline]
    pub fn assistant<S: Into<String>>(s: S) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(s.into()),
        }
    }

    #[inline]
    pub fn tool<S: Into<String>>(s: S) -> Self {
        Self {
            role: Role::Tool,
            content: MessageContent::Text(s.into()),
        }
    }

    #[inline]
    pub fn function<S: Into<String>>(s: S) -> Self {
        Self {
            role: Role::Function,
            content: MessageContent::Text(s.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_content_decodes_to_text() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role":"user","content":"hello"}"#).unwrap();
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, MessageContent::Text("hello".into()));
    }

    #[test]
    fn object_content_decodes_to_image() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"role":"user","content":{"url":"file:///cat.png","detail":"a cat"}}"#,
        )
        .unwrap();
        assert!(msg.content.is_image());
        assert_eq!(msg.content.as_text(), "a cat");
    }

    #[test]
    fn image_without_detail_resolves_to_url() {
        let msg = ChatMessage::user_image("file:///cat.png", None);
        assert_eq!(msg.content.as_text(), "file:///cat.png");
    }

    #[test]
    fn unknown_role_is_a_decode_error() {
        let res: Result<ChatMessage, _> =
            serde_json::from_str(r#"{"role":"narrator","content":"hi"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn numeric_content_is_a_decode_error() {
        let res: Result<ChatMessage, _> = serde_json::from_str(r#"{"role":"user","content":7}"#);
        assert!(res.is_err());
    }
}
