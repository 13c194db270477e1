//! The Personality Insights service: infer a personality profile from a user's text.

// region:    --- Modules

mod service;
mod types;

pub use service::*;
pub use types::*;

// endregion: --- Modules
