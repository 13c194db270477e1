use super::{AudioSink, SessionConfig, SessionServices};
use crate::client::ServiceKind;
use crate::conversation::{Context, MessageRequest, RuntimeIntent};
use crate::personality::{Content, Profile, ProfileOptions};
use crate::text_to_speech::SynthesizedAudio;
use crate::{Error, Result};
use bytes::Bytes;
use derive_more::Display;

// region:    --- Types

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum PipelineStage {
	#[display("transcribe")]
	Transcribe,
	#[display("converse")]
	Converse,
	#[display("synthesize")]
	Synthesize,
	#[display("play")]
	Play,
	#[display("profile")]
	Profile,
}

/// The outcome of one turn of the session.
#[derive(Debug, Clone)]
pub struct Turn {
	/// What the user said (empty for the opening turn).
	pub transcript: String,
	/// What the bot answered, `output.text` joined.
	pub reply: String,
	pub intents: Vec<RuntimeIntent>,
	/// `None` when the bot said nothing, so nothing was synthesized nor played.
	pub audio: Option<SynthesizedAudio>,
}

// endregion: --- Types

/// A voice conversation with one workspace.
///
/// Keeps the dialog `Context` between turns, and the user utterances for
/// `personality_profile`.
pub struct ChatSession<S: AudioSink> {
	services: SessionServices,
	config: SessionConfig,
	context: Option<Context>,
	utterances: Vec<String>,
	sink: S,
}

/// Constructor
impl<S: AudioSink> ChatSession<S> {
	pub fn new(services: SessionServices, config: SessionConfig, sink: S) -> Self {
		Self {
			services,
			config,
			context: None,
			utterances: Vec::new(),
			sink,
		}
	}
}

/// Getters
impl<S: AudioSink> ChatSession<S> {
	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// The dialog context of the last successful turn.
	pub fn context(&self) -> Option<&Context> {
		self.context.as_ref()
	}

	pub fn utterances(&self) -> &[String] {
		&self.utterances
	}

	pub fn sink(&self) -> &S {
		&self.sink
	}

	pub fn sink_mut(&mut self) -> &mut S {
		&mut self.sink
	}

	/// End the session and take back the playback resource.
	pub fn into_sink(self) -> S {
		self.sink
	}
}

/// Turns
impl<S: AudioSink> ChatSession<S> {
	/// Start a new conversation: forget the context and the utterances.
	pub fn reset(&mut self) {
		self.context = None;
		self.utterances.clear();
	}

	/// The opening turn: an empty input, so the dialog plays its welcome node.
	pub async fn start(&mut self) -> Result<Turn> {
		self.reset();
		self.converse_and_speak(String::new()).await
	}

	/// Recorded audio in, spoken reply out.
	pub async fn handle_audio(&mut self, audio: impl Into<Bytes>, content_type: &str) -> Result<Turn> {
		let results = self
			.services
			.speech_to_text
			.recognize(audio, content_type, &self.config.recognize)
			.await
			.map_err(|err| Error::pipeline(PipelineStage::Transcribe, err))?;

		let transcript = results.transcript();
		if transcript.is_empty() {
			return Err(Error::pipeline(PipelineStage::Transcribe, Error::EmptyTranscript));
		}
		tracing::debug!(%transcript, "transcribed");

		self.converse_and_speak(transcript).await
	}

	/// Typed text in, spoken reply out. Blank text is rejected, use `start` for the opening turn.
	pub async fn handle_text(&mut self, text: &str) -> Result<Turn> {
		let text = text.trim();
		if text.is_empty() {
			return Err(Error::pipeline(PipelineStage::Converse, Error::EmptyInput));
		}
		self.converse_and_speak(text.to_string()).await
	}

	/// Personality profile of everything the user said in this session.
	pub async fn personality_profile(&self, options: &ProfileOptions) -> Result<Profile> {
		let personality = self.services.personality.as_ref().ok_or_else(|| {
			Error::pipeline(
				PipelineStage::Profile,
				Error::ServiceNotConfigured {
					kind: ServiceKind::PersonalityInsights,
				},
			)
		})?;

		let content = Content::from_texts(self.utterances.iter().cloned());
		personality
			.profile(content, options)
			.await
			.map_err(|err| Error::pipeline(PipelineStage::Profile, err))
	}

	async fn converse_and_speak(&mut self, transcript: String) -> Result<Turn> {
		// -- Converse
		let mut request = if transcript.is_empty() {
			MessageRequest::default()
		} else {
			MessageRequest::from_text(transcript.clone())
		};
		if let Some(context) = self.context.clone() {
			request = request.with_context(context);
		}

		let response = self
			.services
			.conversation
			.message(&self.config.workspace_id, &request, None)
			.await
			.map_err(|err| Error::pipeline(PipelineStage::Converse, err))?;

		// The dialog advanced server side, so keep its context even if a later stage fails.
		self.context = Some(response.context.clone());
		if !transcript.is_empty() {
			self.utterances.push(transcript.clone());
		}

		let reply = response.output_text();
		tracing::debug!(%reply, "bot reply");

		// -- Synthesize & Play
		let audio = if reply.is_empty() {
			None
		} else {
			let audio = self
				.services
				.text_to_speech
				.synthesize(&reply, &self.config.synthesize)
				.await
				.map_err(|err| Error::pipeline(PipelineStage::Synthesize, err))?;

			self.sink
				.play(&audio)
				.map_err(|err| Error::pipeline(PipelineStage::Play, err))?;

			Some(audio)
		};

		Ok(Turn {
			transcript,
			reply,
			intents: response.intents,
			audio,
		})
	}
}
