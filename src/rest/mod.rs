//! The REST marshalling layer.
//!
//! - `EndpointSpec` is the declarative descriptor of one operation (method + path template).
//! - `RestRequest` fills the template, the optional query parameters, and the body.
//! - `interpret` classifies a `WebResponse` into a typed value or an `Error`.

// region:    --- Modules

mod endpoint_spec;
mod error_envelope;
mod interpret;
mod pagination;
mod rest_request;

pub use endpoint_spec::*;
pub use error_envelope::*;
pub use interpret::*;
pub use pagination::*;
pub use rest_request::*;

// endregion: --- Modules
