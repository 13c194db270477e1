use crate::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// HTTP Basic credentials bound to one service instance.
///
/// Immutable once created. The password never shows in `Debug` output.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthData {
	username: String,
	password: String,
}

/// Constructors
impl AuthData {
	pub fn from_basic(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}

	/// Read the username and password from two environment variables.
	pub fn from_env(username_env: &str, password_env: &str) -> Result<Self> {
		let username = read_env(username_env)?;
		let password = read_env(password_env)?;
		Ok(Self { username, password })
	}
}

/// Getters
impl AuthData {
	#[must_use]
	pub fn username(&self) -> &str {
		&self.username
	}

	/// The `Authorization` header value, `Basic base64(username:password)`.
	#[must_use]
	pub fn basic_header_value(&self) -> String {
		let raw = format!("{}:{}", self.username, self.password);
		format!("Basic {}", STANDARD.encode(raw))
	}
}

impl std::fmt::Debug for AuthData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AuthData")
			.field("username", &self.username)
			.field("password", &"REDACTED")
			.finish()
	}
}

fn read_env(name: &str) -> Result<String> {
	std::env::var(name).map_err(|_| Error::MissingCredentials {
		env_name: name.to_string(),
	})
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_basic_header_value() {
		let auth = AuthData::from_basic("Aladdin", "open sesame");
		// Reference value from RFC 7617.
		assert_eq!(auth.basic_header_value(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
	}

	#[test]
	fn test_debug_redacts_password() {
		let auth = AuthData::from_basic("user", "s3cret");
		let debug = format!("{auth:?}");
		assert!(debug.contains("user"));
		assert!(!debug.contains("s3cret"));
	}

	#[test]
	fn test_from_env_missing() {
		let err = AuthData::from_env("CLARETY_TEST_MISSING_USER", "CLARETY_TEST_MISSING_PASS").unwrap_err();
		assert!(
			matches!(err, Error::MissingCredentials { ref env_name } if env_name == "CLARETY_TEST_MISSING_USER")
		);
		assert!(err.is_local());
	}
}

// endregion: --- Tests
