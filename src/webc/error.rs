use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

/// Failures where no HTTP response was obtained.
#[derive(Debug, Display, From)]
pub enum Error {
	#[display("Cannot build the http client: {cause}")]
	ClientBuild { cause: reqwest::Error },

	#[from]
	#[display("Request failed: {_0}")]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::ClientBuild { cause } => Some(cause),
			Self::Reqwest(err) => Some(err),
		}
	}
}

// endregion: --- Error Boilerplate
