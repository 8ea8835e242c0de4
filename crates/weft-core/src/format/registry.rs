use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{PromptError, Result};
use crate::format::{
    GemmaFormatter, Llama2Formatter, Llama3Formatter, MistralFormatter, OctopusFormatter,
    PromptStrategy, QwenFormatter,
};

/// Family key that also serves as the fallback when a lookup misses.
pub const DEFAULT_FAMILY: &str = "llama";

/// Lookup table from model-family keys to prompt strategies.
///
/// Build one at startup (usually via [`FormatterRegistry::with_builtins`]),
/// register any extra families, then hand it to `PromptCompiler`; from the
/// compiler's side it is read-only. There is no process-global instance.
pub struct FormatterRegistry {
    formatters: HashMap<String, Arc<dyn PromptStrategy>>,
    fallback: Arc<dyn PromptStrategy>,
}

impl FormatterRegistry {
    /// Registry with the six built-in families registered.
    pub fn with_builtins() -> Self {
        let fallback: Arc<dyn PromptStrategy> = Arc::new(Llama2Formatter);

        let mut formatters: HashMap<String, Arc<dyn PromptStrategy>> = HashMap::new();
        formatters.insert("octopusv2".into(), Arc::new(OctopusFormatter));
        formatters.insert(DEFAULT_FAMILY.into(), fallback.clone());
        formatters.insert("llama3".into(), Arc::new(Llama3Formatter));
        formatters.insert("gemma".into(), Arc::new(GemmaFormatter));
        formatters.insert("qwen".into(), Arc::new(QwenFormatter));
        formatters.insert("mistral".into(), Arc::new(MistralFormatter));

        Self {
            formatters,
            fallback,
        }
    }

    /// Total lookup: `None` or an unknown key resolves to the Llama-2-style
    /// fallback. Never an error — callers wanting strictness check
    /// [`FormatterRegistry::contains`] first.
    pub fn resolve(&self, family: Option<&str>) -> &dyn PromptStrategy {
        let key = family.unwrap_or(DEFAULT_FAMILY);
        match self.formatters.get(key) {
            Some(strategy) => strategy.as_ref(),
            None => {
                debug!(family = key, "unknown prompt family, using fallback");
                self.fallback.as_ref()
            }
        }
    }

    /// Register an additional family. Refuses to overwrite an existing key;
    /// use [`FormatterRegistry::register_or_replace`] when replacement is
    /// the intent.
    pub fn register<S: Into<String>>(
        &mut self,
        family: S,
        strategy: Arc<dyn PromptStrategy>,
    ) -> Result<()> {
        let family = family.into();
        if self.formatters.contains_key(&family) {
            return Err(PromptError::DuplicateFamily(family));
        }
        self.formatters.insert(family, strategy);
        Ok(())
    }

    /// Insert or replace a family on purpose; returns the displaced strategy.
    pub fn register_or_replace<S: Into<String>>(
        &mut self,
        family: S,
        strategy: Arc<dyn PromptStrategy>,
    ) -> Option<Arc<dyn PromptStrategy>> {
        self.formatters.insert(family.into(), strategy)
    }

    #[inline]
    pub fn contains(&self, family: &str) -> bool {
        self.formatters.contains_key(family)
    }

    /// Registered family keys, for callers that validate strictly before
    /// compiling.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
