use super::{EndpointSpec, ListOptions};
use crate::client::ServiceTarget;
use crate::webc::{WebBody, WebRequest};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::Url;
use serde::Serialize;

const DEFAULT_ACCEPT: &str = "application/json";

/// Builder of one request, from an `EndpointSpec` to a `WebRequest`.
///
/// Local failures (`Error::Encoding`, `Error::Serialization`) are raised here, so they
/// never reach the transport.
#[derive(Debug, Clone)]
pub struct RestRequest {
	spec: EndpointSpec,
	path_params: Vec<(&'static str, String)>,
	query: Vec<(&'static str, String)>,
	headers: Vec<(String, String)>,
	accept: Option<String>,
	body: WebBody,
}

/// Constructor
impl RestRequest {
	pub fn new(spec: EndpointSpec) -> Self {
		Self {
			spec,
			path_params: Vec::new(),
			query: Vec::new(),
			headers: Vec::new(),
			accept: None,
			body: WebBody::Empty,
		}
	}
}

/// Chainable Setters
impl RestRequest {
	/// Value of the `{name}` placeholder. Percent-encoded when the path is rendered.
	#[must_use]
	pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.path_params.push((name, value.into()));
		self
	}

	#[must_use]
	pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
		self.query.push((name, value.to_string()));
		self
	}

	/// Add the query parameter only when `value` is `Some`.
	#[must_use]
	pub fn query_opt<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
		match value {
			Some(value) => self.query(name, value),
			None => self,
		}
	}

	/// `page_limit`, `include_count`, `sort`, `cursor` (each only when set).
	#[must_use]
	pub fn list_options(self, options: &ListOptions) -> Self {
		self.query_opt("page_limit", options.page_limit)
			.query_opt("include_count", options.include_count)
			.query_opt("sort", options.sort.as_ref())
			.query_opt("cursor", options.cursor.as_deref())
	}

	#[must_use]
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// Override the `Accept` header (defaults to `application/json`).
	#[must_use]
	pub fn accept(mut self, value: impl Into<String>) -> Self {
		self.accept = Some(value.into());
		self
	}

	/// Serialize `body` to JSON now. `context` names the body in the error.
	pub fn json_body<T: Serialize + ?Sized>(mut self, context: &'static str, body: &T) -> Result<Self> {
		let value = serde_json::to_value(body).map_err(|cause| Error::Serialization { context, cause })?;
		self.body = WebBody::Json(value);
		Ok(self)
	}

	/// Same as `json_body`, no body when `None`.
	pub fn json_body_opt<T: Serialize>(self, context: &'static str, body: Option<&T>) -> Result<Self> {
		match body {
			Some(body) => self.json_body(context, body),
			None => Ok(self),
		}
	}

	#[must_use]
	pub fn text_body(mut self, text: impl Into<String>) -> Self {
		self.body = WebBody::Text(text.into());
		self
	}

	#[must_use]
	pub fn binary_body(mut self, content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
		self.body = WebBody::Binary {
			content_type: content_type.into(),
			data: data.into(),
		};
		self
	}
}

/// Getters
impl RestRequest {
	pub fn spec(&self) -> &EndpointSpec {
		&self.spec
	}

	pub fn body(&self) -> &WebBody {
		&self.body
	}
}

/// Resolution
impl RestRequest {
	/// Fill the path template with the encoded path parameters.
	///
	/// Every placeholder must have exactly one non-empty value, and every value must
	/// match a placeholder.
	pub fn render_path(&self) -> Result<String> {
		let template = self.spec.path;
		let mut rendered = String::with_capacity(template.len());
		let mut used = vec![false; self.path_params.len()];

		let mut rest = template;
		while let Some(start) = rest.find('{') {
			rendered.push_str(&rest[..start]);
			let after = &rest[start + 1..];
			let end = after.find('}').ok_or_else(|| Error::Encoding {
				name: after.to_string(),
				reason: format!("unterminated placeholder in path template '{template}'"),
			})?;
			let name = &after[..end];

			let idx = self
				.path_params
				.iter()
				.position(|(param_name, _)| *param_name == name)
				.ok_or_else(|| Error::Encoding {
					name: name.to_string(),
					reason: "no value supplied".to_string(),
				})?;
			used[idx] = true;

			rendered.push_str(&encode_path_segment(name, &self.path_params[idx].1)?);
			rest = &after[end + 1..];
		}
		rendered.push_str(rest);

		if let Some(((name, _), _)) = self.path_params.iter().zip(&used).find(|(_, used)| !**used) {
			return Err(Error::Encoding {
				name: name.to_string(),
				reason: format!("not a placeholder of '{template}', or supplied twice"),
			});
		}

		Ok(rendered)
	}

	/// Resolve against a service target: absolute url, `version` first in the query,
	/// Basic authorization, and `Accept`.
	pub fn into_web_request(self, target: &ServiceTarget) -> Result<WebRequest> {
		let path = self.render_path()?;
		let raw_url = target.endpoint.join(&path);
		let mut url = Url::parse(&raw_url).map_err(|err| Error::InvalidEndpoint {
			url: raw_url.clone(),
			cause: err.to_string(),
		})?;

		let version = target.version.as_ref();
		if version.is_some() || !self.query.is_empty() {
			let mut pairs = url.query_pairs_mut();
			if let Some(version) = version {
				pairs.append_pair("version", version.as_str());
			}
			for (name, value) in &self.query {
				pairs.append_pair(name, value);
			}
		}

		let mut headers = Vec::with_capacity(self.headers.len() + 2);
		headers.push(("Authorization".to_string(), target.auth.basic_header_value()));
		headers.push((
			"Accept".to_string(),
			self.accept.unwrap_or_else(|| DEFAULT_ACCEPT.to_string()),
		));
		headers.extend(self.headers);

		Ok(WebRequest {
			method: self.spec.method,
			url,
			headers,
			body: self.body,
		})
	}
}

/// Percent-encode one path segment (everything but `A-Z a-z 0-9 - _ . ~`).
///
/// `.` and `..` are rejected, since url normalization would drop them as dot segments.
pub fn encode_path_segment(name: &str, value: &str) -> Result<String> {
	match value {
		"" => Err(Error::Encoding {
			name: name.to_string(),
			reason: "value is empty".to_string(),
		}),
		"." | ".." => Err(Error::Encoding {
			name: name.to_string(),
			reason: format!("'{value}' cannot be used as a path segment"),
		}),
		_ => Ok(urlencoding::encode(value).into_owned()),
	}
}

// region:    --- Tests


// endregion: --- Tests
