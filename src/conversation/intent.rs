//! Intent and example (user utterance) types and operations.

use super::ConversationService;
use super::endpoints::{
	CREATE_EXAMPLE,
	CREATE_INTENT,
	DELETE_EXAMPLE,
	DELETE_INTENT,
	GET_EXAMPLE,
	GET_INTENT,
	LIST_EXAMPLES,
	LIST_INTENTS,
	UPDATE_EXAMPLE,
	UPDATE_INTENT,
};
use crate::Result;
use crate::rest::{ListOptions, Pagination, RestRequest};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// region:    --- Intent Types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
	pub intent: String,
	pub description: Option<String>,
	pub created: Option<String>,
	pub updated: Option<String>,
	/// Only filled with `export = true`.
	pub examples: Vec<Example>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateIntent {
	pub intent: String,
	pub description: Option<String>,
	pub examples: Option<Vec<CreateExample>>,
}

impl CreateIntent {
	pub fn new(intent: impl Into<String>) -> Self {
		Self {
			intent: intent.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the examples from their text.
	#[must_use]
	pub fn with_examples<I, S>(mut self, texts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.examples = Some(texts.into_iter().map(CreateExample::new).collect());
		self
	}
}

/// The body of `update_intent`. `intent` renames the intent. Given examples replace all existing ones.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateIntent {
	pub intent: Option<String>,
	pub description: Option<String>,
	pub examples: Option<Vec<CreateExample>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentCollection {
	pub intents: Vec<Intent>,
	pub pagination: Pagination,
}

// endregion: --- Intent Types

// region:    --- Example Types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
	pub text: String,
	pub created: Option<String>,
	pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExample {
	pub text: String,
}

impl CreateExample {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExample {
	pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleCollection {
	pub examples: Vec<Example>,
	pub pagination: Pagination,
}

// endregion: --- Example Types

// region:    --- Intent Operations

impl ConversationService {
	pub async fn list_intents(
		&self,
		workspace_id: &str,
		export: Option<bool>,
		options: &ListOptions,
	) -> Result<IntentCollection> {
		let request = RestRequest::new(LIST_INTENTS)
			.path_param("workspace_id", workspace_id)
			.query_opt("export", export)
			.list_options(options);
		self.exec_json(request).await
	}

	pub async fn create_intent(&self, workspace_id: &str, intent: &CreateIntent) -> Result<Intent> {
		let request = RestRequest::new(CREATE_INTENT)
			.path_param("workspace_id", workspace_id)
			.json_body("intent", intent)?;
		self.exec_json(request).await
	}

	pub async fn get_intent(&self, workspace_id: &str, intent: &str, export: Option<bool>) -> Result<Intent> {
		let request = RestRequest::new(GET_INTENT)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent)
			.query_opt("export", export);
		self.exec_json(request).await
	}

	pub async fn update_intent(&self, workspace_id: &str, intent: &str, update: &UpdateIntent) -> Result<Intent> {
		let request = RestRequest::new(UPDATE_INTENT)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent)
			.json_body("intent", update)?;
		self.exec_json(request).await
	}

	pub async fn delete_intent(&self, workspace_id: &str, intent: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_INTENT)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent);
		self.exec_void(request).await
	}
}

// endregion: --- Intent Operations

// region:    --- Example Operations

impl ConversationService {
	pub async fn list_examples(
		&self,
		workspace_id: &str,
		intent: &str,
		options: &ListOptions,
	) -> Result<ExampleCollection> {
		let request = RestRequest::new(LIST_EXAMPLES)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent)
			.list_options(options);
		self.exec_json(request).await
	}

	pub async fn create_example(&self, workspace_id: &str, intent: &str, text: &str) -> Result<Example> {
		let request = RestRequest::new(CREATE_EXAMPLE)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent)
			.json_body("example", &CreateExample::new(text))?;
		self.exec_json(request).await
	}

	pub async fn get_example(&self, workspace_id: &str, intent: &str, text: &str) -> Result<Example> {
		let request = RestRequest::new(GET_EXAMPLE)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent)
			.path_param("text", text);
		self.exec_json(request).await
	}

	pub async fn update_example(
		&self,
		workspace_id: &str,
		intent: &str,
		text: &str,
		update: &UpdateExample,
	) -> Result<Example> {
		let request = RestRequest::new(UPDATE_EXAMPLE)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent)
			.path_param("text", text)
			.json_body("example", update)?;
		self.exec_json(request).await
	}

	pub async fn delete_example(&self, workspace_id: &str, intent: &str, text: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_EXAMPLE)
			.path_param("workspace_id", workspace_id)
			.path_param("intent", intent)
			.path_param("text", text);
		self.exec_void(request).await
	}
}

// endregion: --- Example Operations
