use std::sync::Arc;

/// A construct to store the endpoint of a service.
/// It is designed to be efficiently clonable.
///
/// The base url is the service root, without trailing slash and without the `/v1` segment
/// (e.g., `https://gateway.watsonplatform.net/conversation/api`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Join a rendered path (starting with `/`) to the base url.
	pub(crate) fn join(&self, path: &str) -> String {
		format!("{}{path}", self.inner.trim_end_matches('/'))
	}
}

// region:    --- Tests


// endregion: --- Tests
