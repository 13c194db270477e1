use std::sync::Arc;

/// The date string pinning a versioned API revision (e.g., `2017-05-26`).
///
/// Fixed per `ServiceTarget`, and sent as the first query parameter of every request
/// to a versioned service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiVersion {
	inner: Arc<str>,
}

impl ApiVersion {
	#[must_use]
	pub fn from_static(version: &'static str) -> Self {
		Self {
			inner: Arc::from(version),
		}
	}

	pub fn new(version: impl Into<Arc<str>>) -> Self {
		Self { inner: version.into() }
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.inner
	}
}

impl From<&str> for ApiVersion {
	fn from(version: &str) -> Self {
		Self::new(version)
	}
}
