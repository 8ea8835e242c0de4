//! Weft ABI crate: stable chat contracts shared by the host UI and inference backends.

pub mod message;
pub mod prompt;

pub use message::*;
pub use prompt::*;
