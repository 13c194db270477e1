//! The generic typed endpoint invocation.
//!
//! Every service operation ends in one of `exec_json`, `exec_void`, `exec_raw`:
//! resolve the `RestRequest`, do exactly one transport call, interpret the response.

use crate::client::{Client, ServiceTarget};
use crate::rest::{RestRequest, interpret_json, interpret_raw, interpret_void};
use crate::webc::WebResponse;
use crate::Result;
use serde::de::DeserializeOwned;

impl Client {
	/// Execute a value returning operation.
	pub async fn exec_json<T: DeserializeOwned>(&self, target: &ServiceTarget, request: RestRequest) -> Result<T> {
		let response = self.exec(target, request).await?;
		interpret_json(response)
	}

	/// Execute an operation with no meaningful success body.
	pub async fn exec_void(&self, target: &ServiceTarget, request: RestRequest) -> Result<()> {
		let response = self.exec(target, request).await?;
		interpret_void(response)
	}

	/// Execute an operation whose success body is not JSON.
	pub async fn exec_raw(&self, target: &ServiceTarget, request: RestRequest) -> Result<WebResponse> {
		let response = self.exec(target, request).await?;
		interpret_raw(response)
	}

	async fn exec(&self, target: &ServiceTarget, request: RestRequest) -> Result<WebResponse> {
		let spec = *request.spec();
		let web_request = request.into_web_request(target)?;

		tracing::debug!(
			service = target.kind.as_lower_str(),
			method = %spec.method,
			template = spec.path,
			url = %web_request.url,
			"exec request"
		);

		let response = self.inner.transport.send(web_request).await?;
		Ok(response)
	}
}
