//! Entities, their values, and the synonyms of each value.

use super::ConversationService;
use super::endpoints::{
	CREATE_ENTITY,
	CREATE_SYNONYM,
	CREATE_VALUE,
	DELETE_ENTITY,
	DELETE_SYNONYM,
	DELETE_VALUE,
	GET_ENTITY,
	GET_SYNONYM,
	GET_VALUE,
	LIST_ENTITIES,
	LIST_SYNONYMS,
	LIST_VALUES,
	UPDATE_ENTITY,
	UPDATE_SYNONYM,
	UPDATE_VALUE,
};
use crate::Result;
use crate::rest::{ListOptions, Pagination, RestRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

// region:    --- Entity Types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
	pub entity: String,
	pub description: Option<String>,
	pub metadata: Option<Value>,
	pub fuzzy_match: Option<bool>,
	pub created: Option<String>,
	pub updated: Option<String>,
	/// Only filled with `export = true`.
	pub values: Vec<EntityValue>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEntity {
	pub entity: String,
	pub description: Option<String>,
	pub metadata: Option<Value>,
	pub values: Option<Vec<CreateValue>>,
	pub fuzzy_match: Option<bool>,
}

impl CreateEntity {
	pub fn new(entity: impl Into<String>) -> Self {
		Self {
			entity: entity.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_values(mut self, values: Vec<CreateValue>) -> Self {
		self.values = Some(values);
		self
	}

	#[must_use]
	pub const fn with_fuzzy_match(mut self, value: bool) -> Self {
		self.fuzzy_match = Some(value);
		self
	}
}

/// The body of `update_entity`. `entity` renames it. Given values replace all existing ones.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntity {
	pub entity: Option<String>,
	pub description: Option<String>,
	pub metadata: Option<Value>,
	pub fuzzy_match: Option<bool>,
	pub values: Option<Vec<CreateValue>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityCollection {
	pub entities: Vec<Entity>,
	pub pagination: Pagination,
}

// endregion: --- Entity Types

// region:    --- Value Types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityValue {
	pub value: String,
	pub metadata: Option<Value>,
	pub created: Option<String>,
	pub updated: Option<String>,
	/// Only filled with `export = true`.
	pub synonyms: Vec<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateValue {
	pub value: String,
	pub metadata: Option<Value>,
	pub synonyms: Option<Vec<String>>,
}

impl CreateValue {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			..Default::default()
		}
	}

	#[must_use]
	pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
		self
	}
}

/// The body of `update_value`. `value` renames it. Given synonyms replace all existing ones.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateValue {
	pub value: Option<String>,
	pub metadata: Option<Value>,
	pub synonyms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueCollection {
	pub values: Vec<EntityValue>,
	pub pagination: Pagination,
}

// endregion: --- Value Types

// region:    --- Synonym Types

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Synonym {
	pub synonym: String,
	pub created: Option<String>,
	pub updated: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSynonym {
	pub synonym: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSynonym {
	pub synonym: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymCollection {
	pub synonyms: Vec<Synonym>,
	pub pagination: Pagination,
}

// endregion: --- Synonym Types

// region:    --- Entity Operations

impl ConversationService {
	pub async fn list_entities(
		&self,
		workspace_id: &str,
		export: Option<bool>,
		options: &ListOptions,
	) -> Result<EntityCollection> {
		let request = RestRequest::new(LIST_ENTITIES)
			.path_param("workspace_id", workspace_id)
			.query_opt("export", export)
			.list_options(options);
		self.exec_json(request).await
	}

	pub async fn create_entity(&self, workspace_id: &str, entity: &CreateEntity) -> Result<Entity> {
		let request = RestRequest::new(CREATE_ENTITY)
			.path_param("workspace_id", workspace_id)
			.json_body("entity", entity)?;
		self.exec_json(request).await
	}

	pub async fn get_entity(&self, workspace_id: &str, entity: &str, export: Option<bool>) -> Result<Entity> {
		let request = RestRequest::new(GET_ENTITY)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.query_opt("export", export);
		self.exec_json(request).await
	}

	pub async fn update_entity(&self, workspace_id: &str, entity: &str, update: &UpdateEntity) -> Result<Entity> {
		let request = RestRequest::new(UPDATE_ENTITY)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.json_body("entity", update)?;
		self.exec_json(request).await
	}

	pub async fn delete_entity(&self, workspace_id: &str, entity: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_ENTITY)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity);
		self.exec_void(request).await
	}
}

// endregion: --- Entity Operations

// region:    --- Value Operations

impl ConversationService {
	pub async fn list_values(
		&self,
		workspace_id: &str,
		entity: &str,
		export: Option<bool>,
		options: &ListOptions,
	) -> Result<ValueCollection> {
		let request = RestRequest::new(LIST_VALUES)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.query_opt("export", export)
			.list_options(options);
		self.exec_json(request).await
	}

	pub async fn create_value(&self, workspace_id: &str, entity: &str, value: &CreateValue) -> Result<EntityValue> {
		let request = RestRequest::new(CREATE_VALUE)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.json_body("value", value)?;
		self.exec_json(request).await
	}

	pub async fn get_value(
		&self,
		workspace_id: &str,
		entity: &str,
		value: &str,
		export: Option<bool>,
	) -> Result<EntityValue> {
		let request = RestRequest::new(GET_VALUE)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value)
			.query_opt("export", export);
		self.exec_json(request).await
	}

	pub async fn update_value(
		&self,
		workspace_id: &str,
		entity: &str,
		value: &str,
		update: &UpdateValue,
	) -> Result<EntityValue> {
		let request = RestRequest::new(UPDATE_VALUE)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value)
			.json_body("value", update)?;
		self.exec_json(request).await
	}

	pub async fn delete_value(&self, workspace_id: &str, entity: &str, value: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_VALUE)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value);
		self.exec_void(request).await
	}
}

// endregion: --- Value Operations

// region:    --- Synonym Operations

impl ConversationService {
	pub async fn list_synonyms(
		&self,
		workspace_id: &str,
		entity: &str,
		value: &str,
		options: &ListOptions,
	) -> Result<SynonymCollection> {
		let request = RestRequest::new(LIST_SYNONYMS)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value)
			.list_options(options);
		self.exec_json(request).await
	}

	pub async fn create_synonym(&self, workspace_id: &str, entity: &str, value: &str, synonym: &str) -> Result<Synonym> {
		let body = CreateSynonym {
			synonym: synonym.to_string(),
		};
		let request = RestRequest::new(CREATE_SYNONYM)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value)
			.json_body("synonym", &body)?;
		self.exec_json(request).await
	}

	pub async fn get_synonym(&self, workspace_id: &str, entity: &str, value: &str, synonym: &str) -> Result<Synonym> {
		let request = RestRequest::new(GET_SYNONYM)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value)
			.path_param("synonym", synonym);
		self.exec_json(request).await
	}

	pub async fn update_synonym(
		&self,
		workspace_id: &str,
		entity: &str,
		value: &str,
		synonym: &str,
		update: &UpdateSynonym,
	) -> Result<Synonym> {
		let request = RestRequest::new(UPDATE_SYNONYM)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value)
			.path_param("synonym", synonym)
			.json_body("synonym", update)?;
		self.exec_json(request).await
	}

	pub async fn delete_synonym(&self, workspace_id: &str, entity: &str, value: &str, synonym: &str) -> Result<()> {
		let request = RestRequest::new(DELETE_SYNONYM)
			.path_param("workspace_id", workspace_id)
			.path_param("entity", entity)
			.path_param("value", value)
			.path_param("synonym", synonym);
		self.exec_void(request).await
	}
}

// endregion: --- Synonym Operations

// region:    --- Tests


// endregion: --- Tests
