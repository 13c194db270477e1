use bytes::Bytes;
use serde::{Deserialize, Serialize};

// region:    --- Voices

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Voice {
	/// e.g., `en-US_AllisonVoice`
	pub name: String,
	pub language: String,
	pub gender: String,
	pub url: Option<String>,
	pub description: Option<String>,
	pub customizable: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Voices {
	pub voices: Vec<Voice>,
}

// endregion: --- Voices

// region:    --- AudioFormat

/// The audio format asked to `synthesize` (sent as the `Accept` header).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioFormat {
	#[default]
	Wav,
	OggOpus,
	OggVorbis,
	Mp3,
	Flac,
	/// Raw 16-bit PCM at the given sampling rate.
	L16 { rate: u32 },
}

impl AudioFormat {
	pub fn mime_type(&self) -> String {
		match self {
			Self::Wav => "audio/wav".to_string(),
			Self::OggOpus => "audio/ogg;codecs=opus".to_string(),
			Self::OggVorbis => "audio/ogg;codecs=vorbis".to_string(),
			Self::Mp3 => "audio/mp3".to_string(),
			Self::Flac => "audio/flac".to_string(),
			Self::L16 { rate } => format!("audio/l16;rate={rate}"),
		}
	}
}

// endregion: --- AudioFormat

// region:    --- Synthesize

#[derive(Debug, Clone, Serialize)]
pub(super) struct SynthesizeBody<'a> {
	pub(super) text: &'a str,
}

/// Options of `synthesize`.
#[derive(Debug, Clone, Default)]
pub struct SynthesizeOptions {
	/// Default voice of the service when `None` (`en-US_MichaelVoice`).
	pub voice: Option<String>,
	pub customization_id: Option<String>,
	pub format: AudioFormat,
}

/// Chainable Setters
impl SynthesizeOptions {
	#[must_use]
	pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
		self.voice = Some(voice.into());
		self
	}

	#[must_use]
	pub fn with_customization_id(mut self, customization_id: impl Into<String>) -> Self {
		self.customization_id = Some(customization_id.into());
		self
	}

	#[must_use]
	pub const fn with_format(mut self, format: AudioFormat) -> Self {
		self.format = format;
		self
	}
}

/// The synthesized audio, ready to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
	pub content_type: String,
	pub data: Bytes,
}

impl SynthesizedAudio {
	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

// endregion: --- Synthesize
