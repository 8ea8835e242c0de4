use tracing::debug;

use weft_abi::{ChatMessage, FormattedPrompt};

use crate::format::{DEFAULT_FAMILY, FormatterRegistry};

/// Sole entry point for external callers: resolves a formatter from the
/// registry and renders the dialog.
///
/// Holds no session state; every call is independent and recomputes the
/// prompt even for identical input (callers may be mid-stream). History
/// windowing is the caller's job — see [`crate::ChatHistory`].
pub struct PromptCompiler {
    registry: FormatterRegistry,
}

impl PromptCompiler {
    /// Construct over an explicit registry (dependency injection; there is
    /// no process-global registry to reach for).
    pub fn new(registry: FormatterRegistry) -> Self {
        Self { registry }
    }

    /// Render `messages` with the formatter for `family`. `None` or an
    /// unrecognized family compiles with the fallback dialect.
    pub fn compile(&self, messages: &[ChatMessage], family: Option<&str>) -> FormattedPrompt {
        let formatted = self.registry.resolve(family).format(messages);
        debug!(
            family = family.unwrap_or(DEFAULT_FAMILY),
            turns = messages.len(),
            prompt_chars = formatted.text.len(),
            "compiled chat prompt"
        );
        formatted
    }

    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }
}

impl Default for PromptCompiler {
    fn default() -> Self {
        Self::new(FormatterRegistry::with_builtins())
    }
}
