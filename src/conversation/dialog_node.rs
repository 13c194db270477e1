//! Dialog nodes: the conversation flow graph of a workspace.

use super::ConversationService;
use super::endpoints::{
	CREATE_DIALOG_NODE,
	DELETE_DIALOG_NODE,
	GET_DIALOG_NODE,
	LIST_DIALOG_NODES,
	UPDATE_DIALOG_NODE,
};
use crate::Result;
use crate::rest::{ListOptions, Pagination, RestRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

// region:    --- Types

/// Where the dialog goes after this node.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeNextStep {
	/// `get_user_input`, `skip_user_input`, or `jump_to`.
	pub behavior: String,
	pub dialog_node: Option<String>,
	/// `condition`, `client`, `user_input`, or `body` (only for `jump_to`).
	pub selector: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogNode {
	pub dialog_node: String,
	pub description: Option<String>,
	pub conditions: Option<String>,
	pub parent: Option<String>,
	pub previous_sibling: Option<String>,
	pub output: Option<Value>,
	pub context: Option<Value>,
	pub metadata: Option<Value>,
	pub next_step: Option<DialogNodeNextStep>,
	pub title: Option<String>,
	#[serde(rename = "type")]
	pub node_type: Option<String>,
	pub event_name: Option<String>,
	pub variable: Option<String>,
	pub actions: Option<Value>,
	pub created: Option<String>,
	pub updated: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDialogNode {
	pub dialog_node: String,
	pub description: Option<String>,
	pub conditions: Option<String>,
	pub parent: Option<String>,
	pub previous_sibling: Option<String>,
	pub output: Option<Value>,
	pub context: Option<Value>,
	pub metadata: Option<Value>,
	pub next_step: Option<DialogNodeNextStep>,
	pub title: Option<String>,
	#[serde(rename = "type")]
	pub node_type: Option<String>,
	pub event_name: Option<String>,
	pub variable: Option<String>,
	pub actions: Option<Value>,
}

impl CreateDialogNode {
	pub fn new(dialog_node: impl Into<String>) -> Self {
		Self {
			dialog_node: dialog_node.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_conditions(mut self, conditions: impl Into<String>) -> Self {
		self.conditions = Some(conditions.into());
		self
	}

	/// Set `output.text` to a single response text.
	#[must_use]
	pub fn with_output_text(mut self, text: impl Into<String>) -> Self {
		self.output = Some(serde_json::json!({ "text": text.into() }));
		self
	}

	#[must_use]
	pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
		self.parent = Some(parent.into());
		self
	}
}

/// The body of `update_dialog_node`. `dialog_node` renames the node.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDialogNode {
	pub dialog_node: Option<String>,
	pub description: Option<String>,
	pub conditions: Option<String>,
	pub parent: Option<String>,
	pub previous_sibling: Option<String>,
	pub output: Option<Value>,
	pub context: Option<Value>,
	pub metadata: Option<Value>,
	pub next_step: Option<DialogNodeNextStep>,
	pub title: Option<String>,
	#[serde(rename = "type")]
	pub node_type: Option<String>,
	pub event_name: Option<String>,
	pub variable: Option<String>,
	pub actions: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogNodeCollection {
	pub dialog_nodes: Vec<DialogNode>,
	pub pagination: Pagination,
}

// endregion: --- Types

// region:    --- Operations

impl ConversationService {
	pub async fn list_dialog_nodes(&self, workspace_id: &str, options: &ListOptions) -> Result<DialogNodeCollection> {
		let request = RestRequest::new(LIST_DIALOG_NODES)
			.path_param("workspace_id", workspace_id)
			.list_options(options);
		self.exec_json(request).await
	}

	pub async fn create_dialog_node(&self, workspace_id: &str, node: &CreateDialogNode) -> Result<DialogNode> {
		let request = RestRequest::new(CREATE_DIALOG_NODE)
			.path_param("workspace_id", workspace_id)
			.json_body("dialog node", node)?;
		self.exec_json(request).await
	}

	pub async fn get_dialog_node(&self, workspace_id: &str, dialog_node: &str) -> Result<DialogNode> {
		let request = RestRequest::new(GET_DIALOG_NODE)
			.path_param("workspace_id", workspace_id)
			.path_param("dialog_node", dialog_node);
		self.exec_json(request).await
	}

	pub async fn update_dialog_node(
		&self,
		workspace_id: &str,
		dialog_node: &str,
		update: &UpdateDialogNode,
	) -> Result<DialogNode> {
		let request = RestRequest::new(UPDATE_DIALOG_NODE)
			.path_param("workspace_id", workspace_id)
			.path_param("dialog_node", dialog_node)
			.json_body("dialog node", update)?;
		self.exec_json(request).await
	}

	pub async fn delete_dialog_node(&self, workspace_id: &str, dialog_node: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_DIALOG_NODE)
			.path_param("workspace_id", workspace_id)
			.path_param("dialog_node", dialog_node);
		self.exec_void(request).await
	}
}

// endregion: --- Operations
