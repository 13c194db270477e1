use crate::webc::HttpMethod;

/// The static description of one REST operation.
///
/// The path template uses `{name}` placeholders, each filled by `RestRequest::path_param`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
	pub method: HttpMethod,
	pub path: &'static str,
}

/// Constructors
impl EndpointSpec {
	pub const fn get(path: &'static str) -> Self {
		Self {
			method: HttpMethod::Get,
			path,
		}
	}

	pub const fn post(path: &'static str) -> Self {
		Self {
			method: HttpMethod::Post,
			path,
		}
	}

	pub const fn delete(path: &'static str) -> Self {
		Self {
			method: HttpMethod::Delete,
			path,
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
