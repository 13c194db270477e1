//! The `Client` owns the transport and executes `RestRequest`s against a `ServiceTarget`.
//! The service handles (`ConversationService`, ...) are created from it.

// region:    --- Modules

mod builder;
mod client_impl;
mod client_types;
mod config;
mod service_kind;
mod service_target;

pub use builder::*;
pub use client_types::*;
pub use config::*;
pub use service_kind::*;
pub use service_target::*;

// endregion: --- Modules
