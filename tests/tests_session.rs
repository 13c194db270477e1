mod support;

use crate::support::{
	MockTransport,
	Result,
	init_tracing,
	mock_conversation,
	mock_personality,
	mock_speech_to_text,
	mock_text_to_speech,
};
use clarety::Error;
use clarety::personality::ProfileOptions;
use clarety::session::{AudioSink, ChatSession, PipelineStage, RecordingSink, SessionConfig, SessionServices};
use clarety::text_to_speech::{AudioFormat, SynthesizedAudio};
use clarety::webc::{WebBody, WebResponse};
use serde_json::{Value, json};
use std::sync::Arc;

const WORKSPACE_ID: &str = "ws-clarety";

// region:    --- Support

/// One mock transport per service, so each stage call count can be checked on its own.
struct Transports {
	conversation: Arc<MockTransport>,
	speech_to_text: Arc<MockTransport>,
	text_to_speech: Arc<MockTransport>,
	personality: Arc<MockTransport>,
}

impl Transports {
	fn new() -> Self {
		Self {
			conversation: MockTransport::new(),
			speech_to_text: MockTransport::new(),
			text_to_speech: MockTransport::new(),
			personality: MockTransport::new(),
		}
	}

	fn services(&self, with_personality: bool) -> SessionServices {
		SessionServices {
			conversation: mock_conversation(&self.conversation),
			speech_to_text: mock_speech_to_text(&self.speech_to_text),
			text_to_speech: mock_text_to_speech(&self.text_to_speech),
			personality: with_personality.then(|| mock_personality(&self.personality)),
		}
	}

	fn session(&self) -> ChatSession<RecordingSink> {
		let config = SessionConfig::new(WORKSPACE_ID).with_audio_format(AudioFormat::Mp3);
		ChatSession::new(self.services(true), config, RecordingSink::default())
	}
}

fn transcript_response(transcript: &str) -> WebResponse {
	WebResponse::json(
		200,
		&json!({
			"result_index": 0,
			"results": [{"final": true, "alternatives": [{"transcript": transcript, "confidence": 0.9}]}]
		}),
	)
}

fn message_response(text: &str, turn: u32) -> WebResponse {
	WebResponse::json(
		200,
		&json!({
			"intents": [{"intent": "turn_on", "confidence": 0.97}],
			"entities": [],
			"output": {"text": [text]},
			"context": {"conversation_id": "conv-1", "system": {"dialog_turn_counter": turn}}
		}),
	)
}

fn audio_response() -> WebResponse {
	WebResponse::new(200, &b"ID3mp3-bytes"[..]).with_content_type("audio/mp3")
}

fn sent_json(transport: &MockTransport) -> Result<Value> {
	match transport.last_request().body {
		WebBody::Json(value) => Ok(value),
		other => Err(format!("expected a JSON body, got {other:?}").into()),
	}
}

/// A sink whose speaker is unplugged.
struct UnpluggedSink;

impl AudioSink for UnpluggedSink {
	fn play(&mut self, _audio: &SynthesizedAudio) -> clarety::Result<()> {
		Err(Error::Transport { status: 503 })
	}
}

// endregion: --- Support

// region:    --- Turns

#[tokio::test]
async fn test_handle_audio_full_turn() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.speech_to_text.push_response(transcript_response("turn on the lights"));
	transports.conversation.push_response(message_response("Sure thing!", 1));
	transports.text_to_speech.push_response(audio_response());
	let mut session = transports.session();

	// -- Exec
	let turn = session.handle_audio(&b"RIFF-wav"[..], "audio/wav").await?;

	// -- Check
	assert_eq!(turn.transcript, "turn on the lights");
	assert_eq!(turn.reply, "Sure thing!");
	assert_eq!(turn.intents[0].intent, "turn_on");
	let audio = turn.audio.ok_or("should have audio")?;
	assert_eq!(audio.content_type, "audio/mp3");

	// each stage called once, in order
	assert_eq!(transports.speech_to_text.call_count(), 1);
	assert_eq!(transports.conversation.call_count(), 1);
	assert_eq!(transports.text_to_speech.call_count(), 1);

	let message = sent_json(&transports.conversation)?;
	assert_eq!(message["input"]["text"], "turn on the lights");
	assert!(message.get("context").is_none());

	let synthesize = transports.text_to_speech.last_request();
	assert_eq!(synthesize.header("Accept"), Some("audio/mp3"));

	assert_eq!(session.sink().clips().len(), 1);
	assert_eq!(session.sink().clips()[0].data.as_ref(), b"ID3mp3-bytes");
	assert_eq!(session.utterances(), ["turn on the lights"]);

	Ok(())
}

#[tokio::test]
async fn test_context_carried_to_next_turn() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("Sure thing!", 1));
	transports.conversation.push_response(message_response("Done.", 2));
	let mut session = transports.session();

	// -- Exec
	session.handle_text("turn on the lights").await?;
	session.handle_text("and the heater").await?;

	// -- Check
	let message = sent_json(&transports.conversation)?;
	assert_eq!(message["input"]["text"], "and the heater");
	assert_eq!(message["context"]["conversation_id"], "conv-1");
	assert_eq!(message["context"]["system"]["dialog_turn_counter"], 1);

	let context = session.context().ok_or("should have a context")?;
	assert_eq!(context.system.as_ref().and_then(|s| s.get("dialog_turn_counter")), Some(&json!(2)));
	assert_eq!(session.sink().clips().len(), 2);

	Ok(())
}

#[tokio::test]
async fn test_start_sends_empty_input() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("Hello, I am Clarety.", 0));
	let mut session = transports.session();

	// -- Exec
	let turn = session.start().await?;

	// -- Check
	assert_eq!(turn.reply, "Hello, I am Clarety.");
	assert_eq!(sent_json(&transports.conversation)?, json!({}));
	assert!(session.utterances().is_empty());
	assert_eq!(transports.speech_to_text.call_count(), 0);

	Ok(())
}

#[tokio::test]
async fn test_empty_reply_skips_synthesize() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("", 1));
	let mut session = transports.session();

	// -- Exec
	let turn = session.handle_text("hmm").await?;

	// -- Check
	assert!(turn.audio.is_none());
	assert_eq!(transports.text_to_speech.call_count(), 0);
	assert!(session.sink().clips().is_empty());

	Ok(())
}

// endregion: --- Turns

// region:    --- Stage Failures

#[tokio::test]
async fn test_transcribe_failure_halts_pipeline() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.speech_to_text.push_response(WebResponse::new(503, ""));
	let mut session = transports.session();

	// -- Exec
	let err = session
		.handle_audio(&b"RIFF"[..], "audio/wav")
		.await
		.err()
		.ok_or("should fail")?;

	// -- Check
	assert!(
		matches!(&err, Error::Pipeline { stage: PipelineStage::Transcribe, cause } if matches!(**cause, Error::Transport { status: 503 })),
		"got {err:?}"
	);
	assert_eq!(err.status(), Some(503));
	assert_eq!(transports.conversation.call_count(), 0);
	assert_eq!(transports.text_to_speech.call_count(), 0);

	Ok(())
}

#[tokio::test]
async fn test_empty_transcript_halts_pipeline() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports
		.speech_to_text
		.push_response(WebResponse::json(200, &json!({"result_index": 0, "results": []})));
	let mut session = transports.session();

	// -- Exec
	let err = session
		.handle_audio(&b"RIFF"[..], "audio/wav")
		.await
		.err()
		.ok_or("should fail")?;

	// -- Check
	assert!(
		matches!(&err, Error::Pipeline { stage: PipelineStage::Transcribe, cause } if matches!(**cause, Error::EmptyTranscript)),
		"got {err:?}"
	);
	assert_eq!(transports.conversation.call_count(), 0);

	Ok(())
}

#[tokio::test]
async fn test_converse_failure_halts_pipeline() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.speech_to_text.push_response(transcript_response("hello"));
	transports.conversation.push_response(WebResponse::json(
		404,
		&json!({"error": "Workspace not found", "code": 404}),
	));
	let mut session = transports.session();

	// -- Exec
	let err = session
		.handle_audio(&b"RIFF"[..], "audio/wav")
		.await
		.err()
		.ok_or("should fail")?;

	// -- Check
	assert!(
		matches!(err, Error::Pipeline { stage: PipelineStage::Converse, .. }),
		"got {err:?}"
	);
	assert_eq!(err.message(), Some("Workspace not found"));
	assert_eq!(transports.text_to_speech.call_count(), 0);
	assert!(session.context().is_none());
	assert!(session.utterances().is_empty());

	Ok(())
}

#[tokio::test]
async fn test_converse_error_envelope_keeps_previous_context() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("Sure thing!", 1));
	transports
		.conversation
		.push_response(WebResponse::json(200, &json!({"error": "Invalid workspace"})));
	let mut session = transports.session();
	session.handle_text("turn on the lights").await?;

	// -- Exec
	let err = session.handle_text("and the heater").await.err().ok_or("should fail")?;

	// -- Check
	assert!(
		matches!(&err, Error::Pipeline { stage: PipelineStage::Converse, cause } if matches!(**cause, Error::Service { status: 200, .. })),
		"got {err:?}"
	);
	let context = session.context().ok_or("should keep the first turn context")?;
	assert_eq!(context.conversation_id.as_deref(), Some("conv-1"));
	assert_eq!(session.utterances(), ["turn on the lights"]);
	assert_eq!(transports.text_to_speech.call_count(), 1);

	Ok(())
}

#[tokio::test]
async fn test_blank_text_is_rejected() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	let mut session = transports.session();

	// -- Exec
	let err = session.handle_text("  \n\t ").await.err().ok_or("should fail")?;

	// -- Check
	assert!(
		matches!(&err, Error::Pipeline { stage: PipelineStage::Converse, cause } if matches!(**cause, Error::EmptyInput)),
		"got {err:?}"
	);
	assert!(err.is_local());
	assert_eq!(transports.conversation.call_count(), 0);

	Ok(())
}

#[tokio::test]
async fn test_synthesize_failure_keeps_context() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("Sure thing!", 1));
	transports.text_to_speech.push_response(WebResponse::new(500, ""));
	let mut session = transports.session();

	// -- Exec
	let err = session.handle_text("turn on the lights").await.err().ok_or("should fail")?;

	// -- Check
	assert!(
		matches!(err, Error::Pipeline { stage: PipelineStage::Synthesize, .. }),
		"got {err:?}"
	);
	assert!(session.context().is_some());
	assert!(session.sink().clips().is_empty());

	Ok(())
}

#[tokio::test]
async fn test_play_failure() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("Sure thing!", 1));
	transports.text_to_speech.push_response(audio_response());
	let mut session = ChatSession::new(transports.services(false), SessionConfig::new(WORKSPACE_ID), UnpluggedSink);

	// -- Exec
	let err = session.handle_text("turn on the lights").await.err().ok_or("should fail")?;

	// -- Check
	assert!(matches!(err, Error::Pipeline { stage: PipelineStage::Play, .. }), "got {err:?}");
	assert_eq!(transports.text_to_speech.call_count(), 1);

	Ok(())
}

// endregion: --- Stage Failures

// region:    --- Personality

#[tokio::test]
async fn test_personality_profile_of_utterances() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("Nice!", 1));
	transports.conversation.push_response(message_response("Sounds fun.", 2));
	transports
		.personality
		.push_response(WebResponse::json(200, &json!({"processed_language": "en", "word_count": 9})));
	let mut session = transports.session();
	session.handle_text("I love hiking").await?;
	session.handle_text("Let's go climbing this weekend").await?;

	// -- Exec
	let profile = session.personality_profile(&ProfileOptions::default()).await?;

	// -- Check
	assert_eq!(profile.word_count, 9);
	let body = sent_json(&transports.personality)?;
	assert_eq!(body["contentItems"][0]["content"], "I love hiking");
	assert_eq!(body["contentItems"][1]["content"], "Let's go climbing this weekend");

	Ok(())
}

#[tokio::test]
async fn test_personality_not_configured() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	let session = ChatSession::new(
		transports.services(false),
		SessionConfig::new(WORKSPACE_ID),
		RecordingSink::default(),
	);

	// -- Exec
	let err = session
		.personality_profile(&ProfileOptions::default())
		.await
		.err()
		.ok_or("should fail")?;

	// -- Check
	assert!(
		matches!(&err, Error::Pipeline { stage: PipelineStage::Profile, cause } if matches!(**cause, Error::ServiceNotConfigured { .. })),
		"got {err:?}"
	);
	assert_eq!(transports.personality.call_count(), 0);

	Ok(())
}

#[tokio::test]
async fn test_reset_forgets_context() -> Result<()> {
	// -- Setup & Fixtures
	init_tracing();
	let transports = Transports::new();
	transports.conversation.push_response(message_response("Sure thing!", 1));
	let mut session = transports.session();
	session.handle_text("turn on the lights").await?;

	// -- Exec
	session.reset();

	// -- Check
	assert!(session.context().is_none());
	assert!(session.utterances().is_empty());

	Ok(())
}

// endregion: --- Personality
