//! The Conversation service: workspaces and their training data (intents, examples,
//! counterexamples, entities, values, synonyms, dialog nodes), logs, and `message`.
//!
//! Each operation is declared in `endpoints` and executed by `ConversationService`.

// region:    --- Modules

mod counterexample;
mod dialog_node;
mod endpoints;
mod entity;
mod intent;
mod log;
mod message;
mod service;
mod workspace;

pub use counterexample::*;
pub use dialog_node::*;
pub use entity::*;
pub use intent::*;
pub use log::*;
pub use message::*;
pub use service::*;
pub use workspace::*;

// endregion: --- Modules
