use crate::client::{Client, ClientConfig};
use crate::webc::{WebClient, WebTransport};
use crate::Result;
use std::sync::Arc;

/// The builder for the `Client` structure.
///
/// ```rust,no_run
/// # fn main() -> clarety::Result<()> {
/// use clarety::{Client, ClientConfig};
/// use std::time::Duration;
///
/// let client = Client::builder()
/// 	.with_config(ClientConfig::default().with_timeout(Duration::from_secs(30)))
/// 	.build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ClientBuilder {
	config: Option<ClientConfig>,
	transport: Option<Arc<dyn WebTransport>>,
}

/// Builder methods
impl ClientBuilder {
	#[must_use]
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Use a custom transport instead of the `reqwest` backed `WebClient`.
	#[must_use]
	pub fn with_transport(mut self, transport: Arc<dyn WebTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Build the `Client`. Fails only if the default http client cannot be created.
	pub fn build(self) -> Result<Client> {
		let config = self.config.unwrap_or_default();
		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(WebClient::new(&config)?),
		};

		Ok(Client::new(transport, config))
	}
}
