//! The Speech to Text service: transcribe recorded audio.

// region:    --- Modules

mod service;
mod types;

pub use service::*;
pub use types::*;

// endregion: --- Modules
