use crate::resolver::{ApiVersion, Endpoint};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `ServiceKind` is an enum that represents the Watson services this crate can talk to.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
	/// The Conversation service (workspaces, dialog, `message`).
	Conversation,
	/// The Speech to Text service.
	SpeechToText,
	/// The Text to Speech service.
	TextToSpeech,
	/// The Personality Insights service.
	PersonalityInsights,
}

/// Serialization implementations
impl ServiceKind {
	/// Serialize to a static str
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Conversation => "Conversation",
			Self::SpeechToText => "SpeechToText",
			Self::TextToSpeech => "TextToSpeech",
			Self::PersonalityInsights => "PersonalityInsights",
		}
	}

	/// Serialize to a static str
	#[must_use]
	pub const fn as_lower_str(&self) -> &'static str {
		match self {
			Self::Conversation => "conversation",
			Self::SpeechToText => "speech-to-text",
			Self::TextToSpeech => "text-to-speech",
			Self::PersonalityInsights => "personality-insights",
		}
	}
}

/// Defaults
impl ServiceKind {
	#[must_use]
	pub fn default_endpoint(&self) -> Endpoint {
		match self {
			Self::Conversation => Endpoint::from_static("https://gateway.watsonplatform.net/conversation/api"),
			Self::SpeechToText => Endpoint::from_static("https://stream.watsonplatform.net/speech-to-text/api"),
			Self::TextToSpeech => Endpoint::from_static("https://stream.watsonplatform.net/text-to-speech/api"),
			Self::PersonalityInsights => {
				Endpoint::from_static("https://gateway.watsonplatform.net/personality-insights/api")
			}
		}
	}

	/// The API revision pinned by default, `None` for the unversioned speech services.
	#[must_use]
	pub fn default_version(&self) -> Option<ApiVersion> {
		match self {
			Self::Conversation => Some(ApiVersion::from_static("2017-05-26")),
			Self::PersonalityInsights => Some(ApiVersion::from_static("2016-10-20")),
			Self::SpeechToText | Self::TextToSpeech => None,
		}
	}

	#[must_use]
	pub const fn is_versioned(&self) -> bool {
		matches!(self, Self::Conversation | Self::PersonalityInsights)
	}

	/// The `(username, password)` environment variable names.
	#[must_use]
	pub const fn default_credential_env_names(&self) -> (&'static str, &'static str) {
		match self {
			Self::Conversation => ("CONVERSATION_USERNAME", "CONVERSATION_PASSWORD"),
			Self::SpeechToText => ("SPEECH_TO_TEXT_USERNAME", "SPEECH_TO_TEXT_PASSWORD"),
			Self::TextToSpeech => ("TEXT_TO_SPEECH_USERNAME", "TEXT_TO_SPEECH_PASSWORD"),
			Self::PersonalityInsights => ("PERSONALITY_INSIGHTS_USERNAME", "PERSONALITY_INSIGHTS_PASSWORD"),
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
