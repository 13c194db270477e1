//! The Conversation operations, one descriptor each.

use crate::rest::EndpointSpec;

// -- Workspaces
pub(super) const LIST_WORKSPACES: EndpointSpec = EndpointSpec::get("/v1/workspaces");
pub(super) const CREATE_WORKSPACE: EndpointSpec = EndpointSpec::post("/v1/workspaces");
pub(super) const GET_WORKSPACE: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}");
pub(super) const UPDATE_WORKSPACE: EndpointSpec = EndpointSpec::post("/v1/workspaces/{workspace_id}");
pub(super) const DELETE_WORKSPACE: EndpointSpec = EndpointSpec::delete("/v1/workspaces/{workspace_id}");

// -- Message
pub(super) const MESSAGE: EndpointSpec = EndpointSpec::post("/v1/workspaces/{workspace_id}/message");

// -- Intents
pub(super) const LIST_INTENTS: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/intents");
pub(super) const CREATE_INTENT: EndpointSpec = EndpointSpec::post("/v1/workspaces/{workspace_id}/intents");
pub(super) const GET_INTENT: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/intents/{intent}");
pub(super) const UPDATE_INTENT: EndpointSpec = EndpointSpec::post("/v1/workspaces/{workspace_id}/intents/{intent}");
pub(super) const DELETE_INTENT: EndpointSpec = EndpointSpec::delete("/v1/workspaces/{workspace_id}/intents/{intent}");

// -- Examples
pub(super) const LIST_EXAMPLES: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/intents/{intent}/examples");
pub(super) const CREATE_EXAMPLE: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/intents/{intent}/examples");
pub(super) const GET_EXAMPLE: EndpointSpec =
	EndpointSpec::get("/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}");
pub(super) const UPDATE_EXAMPLE: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}");
pub(super) const DELETE_EXAMPLE: EndpointSpec =
	EndpointSpec::delete("/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}");

// -- Counterexamples
pub(super) const LIST_COUNTEREXAMPLES: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/counterexamples");
pub(super) const CREATE_COUNTEREXAMPLE: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/counterexamples");
pub(super) const GET_COUNTEREXAMPLE: EndpointSpec =
	EndpointSpec::get("/v1/workspaces/{workspace_id}/counterexamples/{text}");
pub(super) const UPDATE_COUNTEREXAMPLE: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/counterexamples/{text}");
pub(super) const DELETE_COUNTEREXAMPLE: EndpointSpec =
	EndpointSpec::delete("/v1/workspaces/{workspace_id}/counterexamples/{text}");

// -- Entities
pub(super) const LIST_ENTITIES: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/entities");
pub(super) const CREATE_ENTITY: EndpointSpec = EndpointSpec::post("/v1/workspaces/{workspace_id}/entities");
pub(super) const GET_ENTITY: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/entities/{entity}");
pub(super) const UPDATE_ENTITY: EndpointSpec = EndpointSpec::post("/v1/workspaces/{workspace_id}/entities/{entity}");
pub(super) const DELETE_ENTITY: EndpointSpec = EndpointSpec::delete("/v1/workspaces/{workspace_id}/entities/{entity}");

// -- Values
pub(super) const LIST_VALUES: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/entities/{entity}/values");
pub(super) const CREATE_VALUE: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/entities/{entity}/values");
pub(super) const GET_VALUE: EndpointSpec =
	EndpointSpec::get("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}");
pub(super) const UPDATE_VALUE: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}");
pub(super) const DELETE_VALUE: EndpointSpec =
	EndpointSpec::delete("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}");

// -- Synonyms
pub(super) const LIST_SYNONYMS: EndpointSpec =
	EndpointSpec::get("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms");
pub(super) const CREATE_SYNONYM: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms");
pub(super) const GET_SYNONYM: EndpointSpec =
	EndpointSpec::get("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}");
pub(super) const UPDATE_SYNONYM: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}");
pub(super) const DELETE_SYNONYM: EndpointSpec =
	EndpointSpec::delete("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}");

// -- Dialog Nodes
pub(super) const LIST_DIALOG_NODES: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/dialog_nodes");
pub(super) const CREATE_DIALOG_NODE: EndpointSpec = EndpointSpec::post("/v1/workspaces/{workspace_id}/dialog_nodes");
pub(super) const GET_DIALOG_NODE: EndpointSpec =
	EndpointSpec::get("/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}");
pub(super) const UPDATE_DIALOG_NODE: EndpointSpec =
	EndpointSpec::post("/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}");
pub(super) const DELETE_DIALOG_NODE: EndpointSpec =
	EndpointSpec::delete("/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}");

// -- Logs
pub(super) const LIST_LOGS: EndpointSpec = EndpointSpec::get("/v1/workspaces/{workspace_id}/logs");
pub(super) const LIST_ALL_LOGS: EndpointSpec = EndpointSpec::get("/v1/logs");
