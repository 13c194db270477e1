//! The web client layer: the `WebTransport` seam, its request/response constructs,
//! and the `reqwest` backed `WebClient`.
//!
//! NOTE: Everything above this layer only sees `WebRequest` and `WebResponse`,
//!       so a test transport can replace the network entirely.

// region:    --- Modules

mod error;
mod web_client;
mod web_types;

pub use error::{Error, Result};
pub use web_client::*;
pub use web_types::*;

// endregion: --- Modules
