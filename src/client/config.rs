use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("clarety/", env!("CARGO_PKG_VERSION"));

/// Client wide configuration, applied by the default `WebClient` transport.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
	timeout: Option<Duration>,
	user_agent: Option<String>,
}

/// Chainable Setters
impl ClientConfig {
	/// Whole request timeout. No timeout by default.
	#[must_use]
	pub const fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	#[must_use]
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}
}

/// Getters
impl ClientConfig {
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}

	pub fn user_agent(&self) -> &str {
		self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
	}
}
