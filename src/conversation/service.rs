use crate::client::{Client, ServiceTarget};
use crate::rest::RestRequest;
use crate::Result;
use serde::de::DeserializeOwned;

/// Handle on one Conversation service instance.
///
/// Operations are spread by resource (see `workspace`, `intent`, `entity`, ...).
/// Every operation is a single HTTP call.
#[derive(Debug, Clone)]
pub struct ConversationService {
	client: Client,
	target: ServiceTarget,
}

impl ConversationService {
	pub(crate) fn new(client: Client, target: ServiceTarget) -> Self {
		Self { client, target }
	}

	pub fn target(&self) -> &ServiceTarget {
		&self.target
	}

	pub(super) async fn exec_json<T: DeserializeOwned>(&self, request: RestRequest) -> Result<T> {
		self.client.exec_json(&self.target, request).await
	}

	pub(super) async fn exec_void(&self, request: RestRequest) -> Result<()> {
		self.client.exec_void(&self.target, request).await
	}
}
