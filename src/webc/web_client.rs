use super::{Error, Result, WebBody, WebRequest, WebResponse, WebTransport};
use crate::client::ClientConfig;
use futures::future::BoxFuture;
use reqwest::header::CONTENT_TYPE;

/// The default `WebTransport`, backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

impl WebClient {
	pub fn new(config: &ClientConfig) -> Result<Self> {
		let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
		if let Some(timeout) = config.timeout() {
			builder = builder.timeout(timeout);
		}
		let reqwest_client = builder.build().map_err(|cause| Error::ClientBuild { cause })?;

		Ok(Self { reqwest_client })
	}

	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self { reqwest_client }
	}

	async fn do_send(&self, request: WebRequest) -> Result<WebResponse> {
		let WebRequest {
			method,
			url,
			headers,
			body,
		} = request;

		let mut reqwest_builder = self.reqwest_client.request(method.to_reqwest(), url);
		for (name, value) in headers {
			reqwest_builder = reqwest_builder.header(name, value);
		}

		reqwest_builder = match body {
			WebBody::Empty => reqwest_builder,
			WebBody::Json(value) => reqwest_builder.json(&value),
			WebBody::Text(text) => reqwest_builder.header(CONTENT_TYPE, "text/plain;charset=utf-8").body(text),
			WebBody::Binary { content_type, data } => reqwest_builder.header(CONTENT_TYPE, content_type).body(data),
		};

		let response = reqwest_builder.send().await?;

		let status = response.status().as_u16();
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(ToString::to_string);
		let body = response.bytes().await?;

		tracing::debug!(status, bytes = body.len(), %method, "web response");

		Ok(WebResponse {
			status,
			content_type,
			body,
		})
	}
}

impl WebTransport for WebClient {
	fn send(&self, request: WebRequest) -> BoxFuture<'_, Result<WebResponse>> {
		Box::pin(self.do_send(request))
	}
}
