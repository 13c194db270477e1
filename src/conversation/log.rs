//! Conversation logs: the recorded `message` exchanges.

use super::endpoints::{LIST_ALL_LOGS, LIST_LOGS};
use super::{ConversationService, MessageRequest, MessageResponse};
use crate::Result;
use crate::rest::{Pagination, RestRequest, Sort};
use serde::{Deserialize, Serialize};

// region:    --- Types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogExport {
	pub log_id: String,
	pub request: MessageRequest,
	pub response: MessageResponse,
	pub request_timestamp: Option<String>,
	pub response_timestamp: Option<String>,
	pub workspace_id: Option<String>,
	pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogCollection {
	pub logs: Vec<LogExport>,
	pub pagination: Pagination,
}

/// Options of the log listings. Logs support no `include_count`.
#[derive(Debug, Clone, Default)]
pub struct LogListOptions {
	/// A query filter, e.g., `response.intents:intent::goodbye`.
	pub filter: Option<String>,
	pub sort: Option<Sort>,
	pub page_limit: Option<u32>,
	pub cursor: Option<String>,
}

/// Chainable Setters
impl LogListOptions {
	#[must_use]
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = Some(filter.into());
		self
	}

	#[must_use]
	pub fn with_sort(mut self, sort: impl Into<Sort>) -> Self {
		self.sort = Some(sort.into());
		self
	}

	#[must_use]
	pub const fn with_page_limit(mut self, value: u32) -> Self {
		self.page_limit = Some(value);
		self
	}

	#[must_use]
	pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
		self.cursor = Some(cursor.into());
		self
	}
}

// endregion: --- Types

// region:    --- Operations

impl ConversationService {
	/// List the logs of one workspace.
	pub async fn list_logs(&self, workspace_id: &str, options: &LogListOptions) -> Result<LogCollection> {
		let request = RestRequest::new(LIST_LOGS).path_param("workspace_id", workspace_id);
		self.exec_json(with_log_options(request, options.filter.as_deref(), options)).await
	}

	/// List the logs across workspaces. The service requires a filter naming the
	/// workspaces (e.g., `workspace_id::<id>` or `language::en`), hence the `filter` argument.
	pub async fn list_all_logs(&self, filter: &str, options: &LogListOptions) -> Result<LogCollection> {
		let request = RestRequest::new(LIST_ALL_LOGS);
		self.exec_json(with_log_options(request, Some(filter), options)).await
	}
}

fn with_log_options(request: RestRequest, filter: Option<&str>, options: &LogListOptions) -> RestRequest {
	request
		.query_opt("sort", options.sort.as_ref())
		.query_opt("filter", filter)
		.query_opt("page_limit", options.page_limit)
		.query_opt("cursor", options.cursor.as_deref())
}

// endregion: --- Operations
