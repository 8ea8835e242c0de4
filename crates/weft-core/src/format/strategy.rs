//! The formatter capability contract.

use weft_abi::{ChatMessage, FormattedPrompt, Role};

/// Format an ordered dialog into a complete prompt for one model family.
///
/// Implementations are stateless and total: every legal message sequence —
/// empty, missing a system turn, ending on an unanswered user turn —
/// produces a response without panicking. Missing optional pieces degrade
/// to the family's documented defaults instead of failing.
pub trait PromptStrategy: Send + Sync {
    fn format(&self, messages: &[ChatMessage]) -> FormattedPrompt;
}

/// First system message in a dialog, if any (first hit wins).
pub(crate) fn first_system(messages: &[ChatMessage]) -> Option<&str> {
    messages.iter().find_map(|m| {
        if matches!(m.role, Role::System) {
            Some(m.content.as_text())
        } else {
            None
        }
    })
}
