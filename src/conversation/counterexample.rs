//! Counterexamples: utterances marked as matching no intent.

use super::ConversationService;
use super::endpoints::{
	CREATE_COUNTEREXAMPLE,
	DELETE_COUNTEREXAMPLE,
	GET_COUNTEREXAMPLE,
	LIST_COUNTEREXAMPLES,
	UPDATE_COUNTEREXAMPLE,
};
use crate::Result;
use crate::rest::{ListOptions, Pagination, RestRequest};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// region:    --- Types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Counterexample {
	pub text: String,
	pub created: Option<String>,
	pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCounterexample {
	pub text: String,
}

impl CreateCounterexample {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCounterexample {
	pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterexampleCollection {
	pub counterexamples: Vec<Counterexample>,
	pub pagination: Pagination,
}

// endregion: --- Types

// region:    --- Operations

impl ConversationService {
	pub async fn list_counterexamples(
		&self,
		workspace_id: &str,
		options: &ListOptions,
	) -> Result<CounterexampleCollection> {
		let request = RestRequest::new(LIST_COUNTEREXAMPLES)
			.path_param("workspace_id", workspace_id)
			.list_options(options);
		self.exec_json(request).await
	}

	pub async fn create_counterexample(&self, workspace_id: &str, text: &str) -> Result<Counterexample> {
		let request = RestRequest::new(CREATE_COUNTEREXAMPLE)
			.path_param("workspace_id", workspace_id)
			.json_body("counterexample", &CreateCounterexample::new(text))?;
		self.exec_json(request).await
	}

	pub async fn get_counterexample(&self, workspace_id: &str, text: &str) -> Result<Counterexample> {
		let request = RestRequest::new(GET_COUNTEREXAMPLE)
			.path_param("workspace_id", workspace_id)
			.path_param("text", text);
		self.exec_json(request).await
	}

	pub async fn update_counterexample(
		&self,
		workspace_id: &str,
		text: &str,
		update: &UpdateCounterexample,
	) -> Result<Counterexample> {
		let request = RestRequest::new(UPDATE_COUNTEREXAMPLE)
			.path_param("workspace_id", workspace_id)
			.path_param("text", text)
			.json_body("counterexample", update)?;
		self.exec_json(request).await
	}

	pub async fn delete_counterexample(&self, workspace_id: &str, text: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_COUNTEREXAMPLE)
			.path_param("workspace_id", workspace_id)
			.path_param("text", text);
		self.exec_void(request).await
	}
}

// endregion: --- Operations
