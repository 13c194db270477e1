use super::{RecognizeOptions, SpeechModel, SpeechModels, SpeechRecognitionResults};
use crate::client::{Client, ServiceTarget};
use crate::rest::{EndpointSpec, RestRequest};
use crate::Result;
use bytes::Bytes;

const LIST_MODELS: EndpointSpec = EndpointSpec::get("/v1/models");
const GET_MODEL: EndpointSpec = EndpointSpec::get("/v1/models/{model_id}");
const RECOGNIZE: EndpointSpec = EndpointSpec::post("/v1/recognize");

/// Handle on one Speech to Text service instance.
#[derive(Debug, Clone)]
pub struct SpeechToTextService {
	client: Client,
	target: ServiceTarget,
}

impl SpeechToTextService {
	pub(crate) fn new(client: Client, target: ServiceTarget) -> Self {
		Self { client, target }
	}

	pub fn target(&self) -> &ServiceTarget {
		&self.target
	}
}

impl SpeechToTextService {
	pub async fn list_models(&self) -> Result<SpeechModels> {
		self.client.exec_json(&self.target, RestRequest::new(LIST_MODELS)).await
	}

	pub async fn get_model(&self, model_id: &str) -> Result<SpeechModel> {
		let request = RestRequest::new(GET_MODEL).path_param("model_id", model_id);
		self.client.exec_json(&self.target, request).await
	}

	/// Transcribe `audio`. `content_type` is the audio format, e.g., `audio/wav`,
	/// `audio/flac`, `audio/ogg;codecs=opus`, `audio/l16;rate=16000`.
	pub async fn recognize(
		&self,
		audio: impl Into<Bytes>,
		content_type: &str,
		options: &RecognizeOptions,
	) -> Result<SpeechRecognitionResults> {
		let request = RestRequest::new(RECOGNIZE)
			.query_opt("model", options.model.as_deref())
			.query_opt("customization_id", options.customization_id.as_deref())
			.query_opt("max_alternatives", options.max_alternatives)
			.query_opt("word_confidence", options.word_confidence)
			.query_opt("timestamps", options.timestamps)
			.query_opt("profanity_filter", options.profanity_filter)
			.query_opt("smart_formatting", options.smart_formatting)
			.binary_body(content_type, audio);
		self.client.exec_json(&self.target, request).await
	}
}
