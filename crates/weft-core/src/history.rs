//! Rolling, per-session record of chat turns, kept on the caller side.
//! The compiler never windows its input; callers loop `drop_oldest_exchange`
//! against their own budget before compiling.

use weft_abi::{ChatMessage, Role};

#[derive(Default, Debug, Clone)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    #[inline]
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// All stored messages (oldest → newest).
    #[inline]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append an already-constructed message.
    #[inline]
    pub fn push(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
    }

    /// Push a system turn (rare mid-session; usually set once up front).
    #[inline]
    pub fn push_system<S: Into<String>>(&mut self, s: S) {
        self.messages.push(ChatMessage::system(s));
    }

    /// Push a new user turn.
    #[inline]
    pub fn push_user<S: Into<String>>(&mut self, s: S) {
        self.messages.push(ChatMessage::user(s));
    }

    /// Push a user turn referencing an image.
    #[inline]
    pub fn push_user_image<U: Into<String>>(&mut self, url: U, detail: Option<String>) {
        self.messages.push(ChatMessage::user_image(url, detail));
    }

    /// Push a new assistant turn.
    #[inline]
    pub fn push_assistant<S: Into<String>>(&mut self, s: S) {
        self.messages.push(ChatMessage::assistant(s));
    }

    /// Remove all history.
    #[inline]
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Drop the oldest non-system message to make room. If the oldest is a
    /// (user, assistant) pair, remove them together to keep the dialog
    /// coherent. Returns true if something was removed.
    pub fn drop_oldest_exchange(&mut self) -> bool {
        let Some(i) = self
            .messages
            .iter()
            .position(|m| !matches!(m.role, Role::System))
        else {
            return false;
        };

        if i + 1 < self.messages.len()
            && matches!(self.messages[i].role, Role::User)
            && matches!(self.messages[i + 1].role, Role::Assistant)
        {
            self.messages.drain(i..=i + 1);
        } else {
            self.messages.remove(i);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_user_assistant_pair_as_a_unit() {
        let mut h = ChatHistory::new();
        h.push_system("sys");
        h.push_user("q1");
        h.push_assistant("a1");
        h.push_user("q2");

        assert!(h.drop_oldest_exchange());
        assert_eq!(h.len(), 2);
        assert_eq!(h.messages()[0].role, Role::System);
        assert_eq!(h.messages()[1].content.as_text(), "q2");
    }

    #[test]
    fn skips_leading_system_and_reports_exhaustion() {
        let mut h = ChatHistory::new();
        h.push_system("sys");
        h.push_user("dangling");

        assert!(h.drop_oldest_exchange());
        assert_eq!(h.len(), 1);
        // Only the system message remains; nothing more can be dropped.
        assert!(!h.drop_oldest_exchange());
    }
}
