//! Resolver constructs: where a service lives (`Endpoint`), who calls it (`AuthData`),
//! and which API revision is pinned (`ApiVersion`).

// region:    --- Modules

mod api_version;
mod auth_data;
mod endpoint;

pub use api_version::*;
pub use auth_data::*;
pub use endpoint::*;

// endregion: --- Modules
