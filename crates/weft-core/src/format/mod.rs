//! Family formatters: one chat-template dialect each, behind [`PromptStrategy`].

mod gemma;
mod llama2;
mod llama3;
mod mistral;
mod octopus;
mod qwen;
mod registry;
mod strategy;

pub use gemma::GemmaFormatter;
pub use llama2::Llama2Formatter;
pub use llama3::Llama3Formatter;
pub use mistral::MistralFormatter;
pub use octopus::OctopusFormatter;
pub use qwen::QwenFormatter;
pub use registry::{DEFAULT_FAMILY, FormatterRegistry};
pub use strategy::PromptStrategy;
