//! Shared prompt carrier handed from any formatter to inference.
//!
//! Backends are expected to pass `stop_sequences` into generation verbatim;
//! Weft itself does not enforce stops.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPrompt {
    /// Fully rendered prompt, ready to tokenize.
    pub text: String,
    /// Textual stop sentinels for this model family (never empty for the
    /// built-in formatters). Order is preserved; duplicates are not removed.
    pub stop_sequences: Vec<String>,
}

impl FormattedPrompt {
    pub fn new<T: Into<String>>(text: T, stop_sequences: Vec<String>) -> Self {
        Self {
            text: text.into(),
            stop_sequences,
        }
    }

    /// Common single-stop case.
    pub fn with_stop<T: Into<String>, S: Into<String>>(text: T, stop: S) -> Self {
        Self {
            text: text.into(),
            stop_sequences: vec![stop.into()],
        }
    }
}
