use super::{SynthesizeBody, SynthesizeOptions, SynthesizedAudio, Voice, Voices};
use crate::client::{Client, ServiceTarget};
use crate::rest::{EndpointSpec, RestRequest};
use crate::Result;

const LIST_VOICES: EndpointSpec = EndpointSpec::get("/v1/voices");
const GET_VOICE: EndpointSpec = EndpointSpec::get("/v1/voices/{voice}");
const SYNTHESIZE: EndpointSpec = EndpointSpec::post("/v1/synthesize");

/// Handle on one Text to Speech service instance.
#[derive(Debug, Clone)]
pub struct TextToSpeechService {
	client: Client,
	target: ServiceTarget,
}

impl TextToSpeechService {
	pub(crate) fn new(client: Client, target: ServiceTarget) -> Self {
		Self { client, target }
	}

	pub fn target(&self) -> &ServiceTarget {
		&self.target
	}
}

impl TextToSpeechService {
	pub async fn list_voices(&self) -> Result<Voices> {
		self.client.exec_json(&self.target, RestRequest::new(LIST_VOICES)).await
	}

	pub async fn get_voice(&self, voice: &str, customization_id: Option<&str>) -> Result<Voice> {
		let request = RestRequest::new(GET_VOICE)
			.path_param("voice", voice)
			.query_opt("customization_id", customization_id);
		self.client.exec_json(&self.target, request).await
	}

	/// Synthesize `text` to audio in `options.format`.
	pub async fn synthesize(&self, text: &str, options: &SynthesizeOptions) -> Result<SynthesizedAudio> {
		let accept = options.format.mime_type();
		let request = RestRequest::new(SYNTHESIZE)
			.query_opt("voice", options.voice.as_deref())
			.query_opt("customization_id", options.customization_id.as_deref())
			.accept(accept.clone())
			.json_body("synthesize text", &SynthesizeBody { text })?;

		let response = self.client.exec_raw(&self.target, request).await?;

		Ok(SynthesizedAudio {
			content_type: response.content_type.unwrap_or(accept),
			data: response.body,
		})
	}
}
