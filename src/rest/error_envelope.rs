use serde_json::Value;

/// The error body contract of the services.
///
/// ```json
/// { "error": "Workspace not found", "code": 404, "description": "..." }
/// ```
///
/// Only `error` (a string) is required. `code` is read when it is a number, and used only
/// when the HTTP status itself is not usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
	pub error: String,
	pub code: Option<u16>,
	pub description: Option<String>,
}

impl ErrorEnvelope {
	/// Parse the body as an envelope. `None` when the body is not JSON, not an object,
	/// or has no string `error` field.
	pub fn from_body(body: &[u8]) -> Option<Self> {
		let value: Value = serde_json::from_slice(body).ok()?;
		Self::from_value(&value)
	}

	/// Same as `from_body`, on an already parsed body.
	pub fn from_value(value: &Value) -> Option<Self> {
		let error = value.get("error")?.as_str()?.to_string();
		let code = value.get("code").and_then(Value::as_u64).and_then(|c| u16::try_from(c).ok());
		let description = value.get("description").and_then(Value::as_str).map(ToString::to_string);

		Some(Self {
			error,
			code,
			description,
		})
	}
}

// region:    --- Tests


// endregion: --- Tests
