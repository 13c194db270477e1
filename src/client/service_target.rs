use crate::client::ServiceKind;
use crate::Result;
use crate::resolver::{ApiVersion, AuthData, Endpoint};

/// A `ServiceTarget` represents the destination and necessary details for making a service call.
///
/// This structure contains:
/// - `kind`: Which Watson service this is.
/// - `endpoint`: The service root url.
/// - `auth`: The Basic credentials bound to this service instance.
/// - `version`: The pinned API revision, `None` for unversioned services.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServiceTarget {
	pub kind: ServiceKind,
	pub endpoint: Endpoint,
	pub auth: AuthData,
	pub version: Option<ApiVersion>,
}

/// Constructors
impl ServiceTarget {
	/// Target with the default endpoint and version of `kind`.
	pub fn new(kind: ServiceKind, auth: AuthData) -> Self {
		Self {
			kind,
			endpoint: kind.default_endpoint(),
			auth,
			version: kind.default_version(),
		}
	}

	/// Same as `new`, with the credentials read from the default environment variables of `kind`.
	pub fn from_env(kind: ServiceKind) -> Result<Self> {
		let (username_env, password_env) = kind.default_credential_env_names();
		let auth = AuthData::from_env(username_env, password_env)?;
		Ok(Self::new(kind, auth))
	}
}

/// Chainable Setters
impl ServiceTarget {
	#[must_use]
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.endpoint = endpoint;
		self
	}

	/// Pin another API revision. Ignored for unversioned services.
	#[must_use]
	pub fn with_version(mut self, version: impl Into<ApiVersion>) -> Self {
		if self.kind.is_versioned() {
			self.version = Some(version.into());
		}
		self
	}
}
