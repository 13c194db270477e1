use crate::client::{Client, ServiceKind, ServiceTarget};
use crate::conversation::ConversationService;
use crate::personality::PersonalityInsightsService;
use crate::speech_to_text::{RecognizeOptions, SpeechToTextService};
use crate::text_to_speech::{AudioFormat, SynthesizeOptions, TextToSpeechService};
use crate::Result;

/// The service handles used by a `ChatSession`.
#[derive(Debug, Clone)]
pub struct SessionServices {
	pub conversation: ConversationService,
	pub speech_to_text: SpeechToTextService,
	pub text_to_speech: TextToSpeechService,
	/// Only needed for `ChatSession::personality_profile`.
	pub personality: Option<PersonalityInsightsService>,
}

impl SessionServices {
	/// Build every handle from the default environment variables of each `ServiceKind`.
	///
	/// Personality Insights is optional, and left out when its credentials are not set.
	pub fn from_env(client: &Client) -> Result<Self> {
		let conversation = client.conversation(ServiceTarget::from_env(ServiceKind::Conversation)?)?;
		let speech_to_text = client.speech_to_text(ServiceTarget::from_env(ServiceKind::SpeechToText)?)?;
		let text_to_speech = client.text_to_speech(ServiceTarget::from_env(ServiceKind::TextToSpeech)?)?;

		let personality = match ServiceTarget::from_env(ServiceKind::PersonalityInsights) {
			Ok(target) => Some(client.personality_insights(target)?),
			Err(err) => {
				tracing::debug!("personality insights disabled: {err}");
				None
			}
		};

		Ok(Self {
			conversation,
			speech_to_text,
			text_to_speech,
			personality,
		})
	}
}

/// Per session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	pub workspace_id: String,
	pub recognize: RecognizeOptions,
	pub synthesize: SynthesizeOptions,
}

impl SessionConfig {
	pub fn new(workspace_id: impl Into<String>) -> Self {
		Self {
			workspace_id: workspace_id.into(),
			recognize: RecognizeOptions::default(),
			synthesize: SynthesizeOptions::default(),
		}
	}

	#[must_use]
	pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
		self.synthesize.voice = Some(voice.into());
		self
	}

	#[must_use]
	pub const fn with_audio_format(mut self, format: AudioFormat) -> Self {
		self.synthesize.format = format;
		self
	}

	#[must_use]
	pub fn with_recognize_options(mut self, options: RecognizeOptions) -> Self {
		self.recognize = options;
		self
	}
}
