//! Workspace types and operations.

use super::endpoints::{CREATE_WORKSPACE, DELETE_WORKSPACE, GET_WORKSPACE, LIST_WORKSPACES, UPDATE_WORKSPACE};
use super::{
	ConversationService,
	Counterexample,
	CreateCounterexample,
	CreateDialogNode,
	CreateEntity,
	CreateIntent,
	DialogNode,
	Entity,
	Intent,
};
use crate::Result;
use crate::rest::{ListOptions, Pagination, RestRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

// region:    --- Types

/// A workspace. The collections are only filled by `get_workspace(.., export = true)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
	pub workspace_id: String,
	pub name: String,
	pub language: String,
	pub description: Option<String>,
	pub metadata: Option<Value>,
	pub learning_opt_out: Option<bool>,
	pub status: Option<String>,
	pub created: Option<String>,
	pub updated: Option<String>,
	pub intents: Vec<Intent>,
	pub entities: Vec<Entity>,
	pub dialog_nodes: Vec<DialogNode>,
	pub counterexamples: Vec<Counterexample>,
}

/// The body of `create_workspace` and `update_workspace`. Absent fields are omitted.
///
/// On update, a given collection replaces the existing one entirely.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWorkspace {
	pub name: Option<String>,
	pub description: Option<String>,
	pub language: Option<String>,
	pub intents: Option<Vec<CreateIntent>>,
	pub entities: Option<Vec<CreateEntity>>,
	pub dialog_nodes: Option<Vec<CreateDialogNode>>,
	pub counterexamples: Option<Vec<CreateCounterexample>>,
	pub metadata: Option<Value>,
	pub learning_opt_out: Option<bool>,
}

pub type UpdateWorkspace = CreateWorkspace;

/// Chainable Setters
impl CreateWorkspace {
	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = Some(language.into());
		self
	}

	#[must_use]
	pub fn with_intents(mut self, intents: Vec<CreateIntent>) -> Self {
		self.intents = Some(intents);
		self
	}

	#[must_use]
	pub fn with_entities(mut self, entities: Vec<CreateEntity>) -> Self {
		self.entities = Some(entities);
		self
	}

	#[must_use]
	pub fn with_dialog_nodes(mut self, dialog_nodes: Vec<CreateDialogNode>) -> Self {
		self.dialog_nodes = Some(dialog_nodes);
		self
	}

	#[must_use]
	pub fn with_counterexamples(mut self, counterexamples: Vec<CreateCounterexample>) -> Self {
		self.counterexamples = Some(counterexamples);
		self
	}

	#[must_use]
	pub fn with_metadata(mut self, metadata: Value) -> Self {
		self.metadata = Some(metadata);
		self
	}

	#[must_use]
	pub const fn with_learning_opt_out(mut self, value: bool) -> Self {
		self.learning_opt_out = Some(value);
		self
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceCollection {
	pub workspaces: Vec<Workspace>,
	pub pagination: Pagination,
}

// endregion: --- Types

// region:    --- Operations

impl ConversationService {
	pub async fn list_workspaces(&self, options: &ListOptions) -> Result<WorkspaceCollection> {
		let request = RestRequest::new(LIST_WORKSPACES).list_options(options);
		self.exec_json(request).await
	}

	/// Create a workspace. With `None`, the service creates an empty, unnamed workspace.
	pub async fn create_workspace(&self, properties: Option<&CreateWorkspace>) -> Result<Workspace> {
		let request = RestRequest::new(CREATE_WORKSPACE).json_body_opt("workspace", properties)?;
		self.exec_json(request).await
	}

	/// Get a workspace. With `export = Some(true)`, includes all its content.
	pub async fn get_workspace(&self, workspace_id: &str, export: Option<bool>) -> Result<Workspace> {
		let request = RestRequest::new(GET_WORKSPACE)
			.path_param("workspace_id", workspace_id)
			.query_opt("export", export);
		self.exec_json(request).await
	}

	pub async fn update_workspace(&self, workspace_id: &str, properties: Option<&UpdateWorkspace>) -> Result<Workspace> {
		let request = RestRequest::new(UPDATE_WORKSPACE)
			.path_param("workspace_id", workspace_id)
			.json_body_opt("workspace", properties)?;
		self.exec_json(request).await
	}

	pub async fn delete_workspace(&self, workspace_id: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_WORKSPACE).path_param("workspace_id", workspace_id);
		self.exec_void(request).await
	}
}

// endregion: --- Operations

// region:    --- Tests


// endregion: --- Tests
