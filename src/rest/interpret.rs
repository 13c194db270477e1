//! The response interpreter.
//!
//! Two tiers:
//! 1. Status fast path: a 2xx status is a success (void), or the body is decoded into the
//!    declared type (value), unless that body is an error envelope.
//! 2. Body slow path: otherwise the body is checked against the `ErrorEnvelope`.
//!    A matching envelope gives `Error::Service`, anything else fails closed with
//!    `Error::Transport` carrying the raw status.

use super::ErrorEnvelope;
use crate::webc::WebResponse;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Used when neither the HTTP status nor the envelope carries a usable code.
pub const DEFAULT_ERROR_STATUS: u16 = 400;

/// Interpret a response of a value returning operation.
///
/// A 2xx body that is an error envelope is an `Error::Service`, whatever `T` would accept.
pub fn interpret_json<T: DeserializeOwned>(response: WebResponse) -> Result<T> {
	if !response.is_success() {
		return Err(classify_failure(&response));
	}

	let status = response.status;
	let value: Value = serde_json::from_slice(&response.body).map_err(|cause| decode_error(status, cause))?;

	if let Some(envelope) = ErrorEnvelope::from_value(&value) {
		return Err(Error::Service {
			status,
			message: envelope.error,
		});
	}

	serde_json::from_value(value).map_err(|cause| decode_error(status, cause))
}

/// Interpret a response of a void operation (body ignored on success).
pub fn interpret_void(response: WebResponse) -> Result<()> {
	if response.is_success() {
		Ok(())
	} else {
		Err(classify_failure(&response))
	}
}

/// Interpret a response whose success body is not JSON (e.g., synthesized audio).
pub fn interpret_raw(response: WebResponse) -> Result<WebResponse> {
	if response.is_success() {
		Ok(response)
	} else {
		Err(classify_failure(&response))
	}
}

/// Build the error for a non-2xx response.
pub fn classify_failure(response: &WebResponse) -> Error {
	let status = response.status;

	if response.is_body_blank() {
		return Error::Transport { status };
	}

	match ErrorEnvelope::from_body(&response.body) {
		Some(envelope) => Error::Service {
			status: resolve_status(status, envelope.code),
			message: envelope.error,
		},
		None => {
			tracing::warn!(status, "error body does not match the error envelope");
			Error::Transport { status }
		}
	}
}

fn decode_error(status: u16, cause: serde_json::Error) -> Error {
	tracing::warn!(status, %cause, "response body does not match the expected type");
	Error::ResponseDecode { status, cause }
}

fn resolve_status(http_status: u16, envelope_code: Option<u16>) -> u16 {
	if (100..600).contains(&http_status) {
		http_status
	} else {
		envelope_code.unwrap_or(DEFAULT_ERROR_STATUS)
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use serde::Deserialize;
	use serde_json::json;

	#[derive(Debug, Deserialize)]
	struct Named {
		name: String,
	}

	#[test]
	fn test_interpret_json_ok() -> Result<()> {
		let res = WebResponse::json(200, &json!({"name": "demo", "extra": 1}));
		let named: Named = interpret_json(res)?;
		assert_eq!(named.name, "demo");
		Ok(())
	}

	#[test]
	fn test_interpret_json_service_error() {
		let res = WebResponse::json(404, &json!({"error": "Workspace not found"}));
		let err = interpret_json::<Named>(res).unwrap_err();
		assert!(matches!(err, Error::Service { status: 404, ref message } if message == "Workspace not found"));
	}

	#[test]
	fn test_interpret_json_envelope_on_success_status() {
		let res = WebResponse::json(200, &json!({"error": "Invalid request"}));
		let err = interpret_json::<Named>(res).unwrap_err();
		assert_eq!(err.status(), Some(200));
		assert_eq!(err.message(), Some("Invalid request"));
	}

	#[test]
	fn test_interpret_json_envelope_on_success_status_lenient_type() {
		#[derive(Debug, Default, Deserialize)]
		#[serde(default)]
		struct Lenient {
			#[allow(unused)]
			name: Option<String>,
		}

		let res = WebResponse::json(200, &json!({"error": "Invalid workspace"}));
		let err = interpret_json::<Lenient>(res).unwrap_err();
		assert!(matches!(err, Error::Service { status: 200, ref message } if message == "Invalid workspace"));
	}

	#[test]
	fn test_interpret_json_not_json() {
		let res = WebResponse::new(200, "<html>ok</html>");
		let err = interpret_json::<Named>(res).unwrap_err();
		assert!(matches!(err, Error::ResponseDecode { status: 200, .. }));
	}

	#[test]
	fn test_interpret_json_decode_error() {
		let res = WebResponse::json(200, &json!({"other": true}));
		let err = interpret_json::<Named>(res).unwrap_err();
		assert!(matches!(err, Error::ResponseDecode { status: 200, .. }));
	}

	#[test]
	fn test_interpret_void_ignores_body() -> Result<()> {
		interpret_void(WebResponse::new(200, "not json at all"))?;
		interpret_void(WebResponse::new(204, ""))?;
		Ok(())
	}

	#[test]
	fn test_classify_failure_blank_body() {
		let err = classify_failure(&WebResponse::new(500, " \n"));
		assert!(matches!(err, Error::Transport { status: 500 }));
		assert_eq!(err.message(), None);
	}

	#[test]
	fn test_classify_failure_fails_closed() {
		let err = classify_failure(&WebResponse::new(502, "<html>Bad Gateway</html>"));
		assert!(matches!(err, Error::Transport { status: 502 }));
	}

	#[test]
	fn test_classify_failure_unusable_status() {
		let with_code = classify_failure(&WebResponse::json(0, &json!({"error": "boom", "code": 409})));
		assert_eq!(with_code.status(), Some(409));

		let without_code = classify_failure(&WebResponse::json(0, &json!({"error": "boom"})));
		assert_eq!(without_code.status(), Some(DEFAULT_ERROR_STATUS));
	}
}

// endregion: --- Tests
