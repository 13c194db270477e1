//! The Text to Speech service: synthesize the bot replies.

// region:    --- Modules

mod service;
mod types;

pub use service::*;
pub use types::*;

// endregion: --- Modules
