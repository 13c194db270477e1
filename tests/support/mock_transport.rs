use clarety::webc::{self, WebRequest, WebResponse, WebTransport};
use futures::future::BoxFuture;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A transport that records every request and answers with canned responses, in order.
/// When no canned response is left, it answers `200 {}`.
#[derive(Default)]
pub struct MockTransport {
	responses: Mutex<VecDeque<WebResponse>>,
	requests: Mutex<Vec<WebRequest>>,
}

impl MockTransport {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn with_responses(responses: impl IntoIterator<Item = WebResponse>) -> Arc<Self> {
		let transport = Self::default();
		transport.responses.lock().unwrap().extend(responses);
		Arc::new(transport)
	}

	pub fn push_response(&self, response: WebResponse) {
		self.responses.lock().unwrap().push_back(response);
	}

	pub fn call_count(&self) -> usize {
		self.requests.lock().unwrap().len()
	}

	pub fn requests(&self) -> Vec<WebRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> WebRequest {
		self.requests
			.lock()
			.unwrap()
			.last()
			.cloned()
			.expect("at least one request was sent")
	}
}

impl WebTransport for MockTransport {
	fn send(&self, request: WebRequest) -> BoxFuture<'_, webc::Result<WebResponse>> {
		self.requests.lock().unwrap().push(request);
		let response = self
			.responses
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| WebResponse::json(200, &json!({})));
		Box::pin(async move { Ok(response) })
	}
}

/// The query of a request as `name=value` strings, in order.
pub fn query_strings(request: &WebRequest) -> Vec<String> {
	request.query_pairs().into_iter().map(|(k, v)| format!("{k}={v}")).collect()
}
