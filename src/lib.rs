//! Typed async client for the Watson Conversation, Speech to Text, Text to Speech
//! and Personality Insights services, plus the voice chat session that chains them.
//!
//! Every operation is a declarative `EndpointSpec` (method + path template) executed
//! through one generic invocation on the `Client`, and resolves to a `Result<T>`.

// region:    --- Modules

mod error;

pub use error::{Error, Result};

pub mod client;
pub mod conversation;
pub mod personality;
pub mod resolver;
pub mod rest;
pub mod session;
pub mod speech_to_text;
pub mod text_to_speech;
pub mod webc;

// -- Flatten the most used constructs
pub use client::{Client, ClientBuilder, ClientConfig, ServiceKind, ServiceTarget};

// endregion: --- Modules
