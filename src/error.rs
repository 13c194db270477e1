use crate::client::ServiceKind;
use crate::session::PipelineStage;
use crate::webc;
use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

/// The crate error.
///
/// The first group is raised locally, before any network call is attempted.
/// The second group classifies a completed HTTP exchange (see `rest::interpret`).
#[derive(Debug, Display, From)]
pub enum Error {
	// -- Request building (no network I/O)
	#[display("Cannot encode path parameter '{name}': {reason}")]
	Encoding { name: String, reason: String },

	#[display("Cannot serialize {context} to JSON: {cause}")]
	Serialization {
		context: &'static str,
		cause: serde_json::Error,
	},

	#[display("Invalid endpoint url '{url}': {cause}")]
	InvalidEndpoint { url: String, cause: String },

	#[display("Service target is for {actual}, expected {expected}")]
	ServiceKindMismatch { expected: ServiceKind, actual: ServiceKind },

	#[display("No {kind} service configured")]
	ServiceNotConfigured { kind: ServiceKind },

	#[display("Missing credentials, environment variable '{env_name}' is not set")]
	MissingCredentials { env_name: String },

	// -- Response classification
	/// Non-2xx status without a recognizable error envelope.
	#[display("HTTP status {status}")]
	Transport { status: u16 },

	/// Error envelope (`{"error": "..."}`) returned by the service.
	#[display("Service error (HTTP {status}): {message}")]
	Service { status: u16, message: String },

	#[display("Cannot decode response body (HTTP {status}): {cause}")]
	ResponseDecode { status: u16, cause: serde_json::Error },

	// -- Session
	#[display("Speech recognition returned an empty transcript")]
	EmptyTranscript,

	#[display("Nothing to send, the input text is blank")]
	EmptyInput,

	#[display("Chat session stage '{stage}' failed: {cause}")]
	Pipeline { stage: PipelineStage, cause: Box<Error> },

	// -- Externals
	#[from]
	#[display("{_0}")]
	Webc(webc::Error),
}

// region:    --- Accessors

impl Error {
	/// The HTTP status code, when the failure came from a completed HTTP exchange.
	/// For pipeline failures, the status of the underlying stage error.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Transport { status } | Self::Service { status, .. } | Self::ResponseDecode { status, .. } => {
				Some(*status)
			}
			Self::Pipeline { cause, .. } => cause.status(),
			_ => None,
		}
	}

	/// The service message, only present for `Error::Service`.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Service { message, .. } => Some(message),
			Self::Pipeline { cause, .. } => cause.message(),
			_ => None,
		}
	}

	/// True when the error was raised before any network call.
	pub fn is_local(&self) -> bool {
		match self {
			Self::Encoding { .. }
			| Self::Serialization { .. }
			| Self::InvalidEndpoint { .. }
			| Self::MissingCredentials { .. }
			| Self::ServiceKindMismatch { .. }
			| Self::ServiceNotConfigured { .. }
			| Self::EmptyInput => true,
			Self::Pipeline { cause, .. } => cause.is_local(),
			_ => false,
		}
	}

	pub(crate) fn pipeline(stage: PipelineStage, cause: Error) -> Self {
		Self::Pipeline {
			stage,
			cause: Box::new(cause),
		}
	}
}

// endregion: --- Accessors

// region:    --- Error Boilerplate

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Serialization { cause, .. } | Self::ResponseDecode { cause, .. } => Some(cause),
			Self::Pipeline { cause, .. } => Some(cause.as_ref()),
			Self::Webc(err) => Some(err),
			_ => None,
		}
	}
}

// endregion: --- Error Boilerplate
