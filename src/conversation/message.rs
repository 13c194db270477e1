//! The `message` operation: send user input to a workspace and get the dialog response.

use super::ConversationService;
use super::endpoints::MESSAGE;
use crate::Result;
use crate::rest::RestRequest;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

// region:    --- Types

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputData {
	#[serde(default)]
	pub text: String,
}

/// The dialog state. Must be sent back on the next `message` to continue the conversation.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
	pub conversation_id: Option<String>,
	pub system: Option<Value>,
	/// Application specific context variables.
	#[serde(flatten)]
	pub variables: Map<String, Value>,
}

impl Context {
	pub fn variable(&self, name: &str) -> Option<&Value> {
		self.variables.get(name)
	}

	#[must_use]
	pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.variables.insert(name.into(), value.into());
		self
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
	pub intent: String,
	pub confidence: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
	pub entity: String,
	/// Start and end character offsets in the input text.
	#[serde(default)]
	pub location: Vec<u32>,
	pub value: String,
	pub confidence: Option<f64>,
	pub metadata: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
	pub level: String,
	pub msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputData {
	pub log_messages: Vec<LogMessage>,
	pub text: Vec<String>,
	pub nodes_visited: Vec<String>,
	/// Other output set by dialog nodes.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// The body of `message`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
	pub input: Option<InputData>,
	pub alternate_intents: Option<bool>,
	pub context: Option<Context>,
	/// Entities to use instead of the ones detected by the service.
	pub entities: Option<Vec<RuntimeEntity>>,
	/// Intents to use instead of the ones detected by the service.
	pub intents: Option<Vec<RuntimeIntent>>,
	pub output: Option<OutputData>,
}

/// Constructors
impl MessageRequest {
	pub fn from_text(text: impl Into<String>) -> Self {
		Self {
			input: Some(InputData { text: text.into() }),
			..Default::default()
		}
	}
}

/// Chainable Setters
impl MessageRequest {
	#[must_use]
	pub fn with_context(mut self, context: Context) -> Self {
		self.context = Some(context);
		self
	}

	#[must_use]
	pub const fn with_alternate_intents(mut self, value: bool) -> Self {
		self.alternate_intents = Some(value);
		self
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
	pub input: InputData,
	pub intents: Vec<RuntimeIntent>,
	pub entities: Vec<RuntimeEntity>,
	pub alternate_intents: Option<bool>,
	pub context: Context,
	pub output: OutputData,
}

// Getters
impl MessageResponse {
	/// The `output.text` lines joined with a space, empty when the dialog said nothing.
	pub fn output_text(&self) -> String {
		self.output
			.text
			.iter()
			.map(|line| line.trim())
			.filter(|line| !line.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// The intent with the highest confidence.
	pub fn top_intent(&self) -> Option<&RuntimeIntent> {
		self.intents.iter().max_by(|a, b| a.confidence.total_cmp(&b.confidence))
	}
}

// endregion: --- Types

// region:    --- Operations

impl ConversationService {
	/// Send a message to the workspace dialog.
	///
	/// `nodes_visited_details` asks the service to add the visited node details to the output.
	pub async fn message(
		&self,
		workspace_id: &str,
		request: &MessageRequest,
		nodes_visited_details: Option<bool>,
	) -> Result<MessageResponse> {
		let request = RestRequest::new(MESSAGE)
			.path_param("workspace_id", workspace_id)
			.query_opt("nodes_visited_details", nodes_visited_details)
			.json_body("message", request)?;
		self.exec_json(request).await
	}
}

// endregion: --- Operations

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use serde_json::json;

	#[test]
	fn test_message_request_body() -> Result<()> {
		let context = Context {
			conversation_id: Some("c-1".to_string()),
			..Default::default()
		}
		.with_variable("user_name", "Ada");
		let req = MessageRequest::from_text("Turn on the lights").with_context(context);

		let value = serde_json::to_value(&req)?;
		assert_eq!(
			value,
			json!({
				"input": {"text": "Turn on the lights"},
				"context": {"conversation_id": "c-1", "user_name": "Ada"}
			})
		);
		Ok(())
	}

	#[test]
	fn test_message_response_output_and_top_intent() -> Result<()> {
		let res: MessageResponse = serde_json::from_value(json!({
			"intents": [
				{"intent": "greeting", "confidence": 0.4},
				{"intent": "turn_on", "confidence": 0.93}
			],
			"context": {"conversation_id": "c-1", "system": {"dialog_turn_counter": 1}, "reminder": true},
			"output": {"text": ["Sure thing!", " ", "Lights on."], "nodes_visited": ["node_1"]}
		}))?;

		assert_eq!(res.output_text(), "Sure thing! Lights on.");
		assert_eq!(res.top_intent().map(|i| i.intent.as_str()), Some("turn_on"));
		assert_eq!(res.context.variable("reminder"), Some(&json!(true)));
		Ok(())
	}
}

// endregion: --- Tests
