use bytes::Bytes;
use derive_more::Display;
use futures::future::BoxFuture;
use reqwest::Url;
use serde_json::Value;

/// The single network seam of the crate.
///
/// One call to `send` is one HTTP exchange. Implementations must not retry.
pub trait WebTransport: Send + Sync {
	fn send(&self, request: WebRequest) -> BoxFuture<'_, super::Result<WebResponse>>;
}

// region:    --- HttpMethod

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	#[display("GET")]
	Get,
	#[display("POST")]
	Post,
	#[display("DELETE")]
	Delete,
}

impl HttpMethod {
	pub(crate) fn to_reqwest(self) -> reqwest::Method {
		match self {
			Self::Get => reqwest::Method::GET,
			Self::Post => reqwest::Method::POST,
			Self::Delete => reqwest::Method::DELETE,
		}
	}
}

// endregion: --- HttpMethod

// region:    --- WebRequest

/// A fully resolved request: absolute url (query included), headers, and body.
#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: HttpMethod,
	pub url: Url,
	pub headers: Vec<(String, String)>,
	pub body: WebBody,
}

impl WebRequest {
	/// First header value matching `name` (case insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	/// The query pairs, decoded, in url order.
	pub fn query_pairs(&self) -> Vec<(String, String)> {
		self.url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
	}
}

#[derive(Debug, Clone, Default)]
pub enum WebBody {
	#[default]
	Empty,
	Json(Value),
	Text(String),
	Binary {
		content_type: String,
		data: Bytes,
	},
}

// endregion: --- WebRequest

// region:    --- WebResponse

#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: u16,
	pub content_type: Option<String>,
	pub body: Bytes,
}

impl WebResponse {
	pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
		Self {
			status,
			content_type: None,
			body: body.into(),
		}
	}

	/// Convenience for a JSON body.
	pub fn json(status: u16, value: &Value) -> Self {
		Self {
			status,
			content_type: Some("application/json".to_string()),
			body: Bytes::from(value.to_string()),
		}
	}

	#[must_use]
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// True when the body has no meaningful content (empty or only whitespace).
	pub fn is_body_blank(&self) -> bool {
		self.body.iter().all(u8::is_ascii_whitespace)
	}
}

// endregion: --- WebResponse
