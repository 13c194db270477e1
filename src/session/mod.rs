//! The voice chat session: transcribe → converse → synthesize → play.
//!
//! The `ChatSession` owns its playback resource (`AudioSink`) and the running dialog
//! `Context`. Stages run strictly in sequence, and the first failure ends the turn.

// region:    --- Modules

mod audio_sink;
mod chat_session;
mod session_config;

pub use audio_sink::*;
pub use chat_session::*;
pub use session_config::*;

// endregion: --- Modules
