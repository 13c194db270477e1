//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod mock_transport;

pub use mock_transport::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Common Clients

use clarety::conversation::ConversationService;
use clarety::personality::PersonalityInsightsService;
use clarety::resolver::AuthData;
use clarety::speech_to_text::SpeechToTextService;
use clarety::text_to_speech::TextToSpeechService;
use clarety::{Client, ServiceKind, ServiceTarget};
use std::sync::Arc;

pub const USERNAME: &str = "apikey-user";
pub const PASSWORD: &str = "apikey-pass";

pub fn mock_client(transport: &Arc<MockTransport>) -> Client {
	Client::builder()
		.with_transport(transport.clone())
		.build()
		.expect("client with a custom transport always builds")
}

pub fn mock_target(kind: ServiceKind) -> ServiceTarget {
	ServiceTarget::new(kind, AuthData::from_basic(USERNAME, PASSWORD))
}

pub fn mock_conversation(transport: &Arc<MockTransport>) -> ConversationService {
	mock_client(transport)
		.conversation(mock_target(ServiceKind::Conversation))
		.expect("conversation target")
}

pub fn mock_speech_to_text(transport: &Arc<MockTransport>) -> SpeechToTextService {
	mock_client(transport)
		.speech_to_text(mock_target(ServiceKind::SpeechToText))
		.expect("speech to text target")
}

pub fn mock_text_to_speech(transport: &Arc<MockTransport>) -> TextToSpeechService {
	mock_client(transport)
		.text_to_speech(mock_target(ServiceKind::TextToSpeech))
		.expect("text to speech target")
}

pub fn mock_personality(transport: &Arc<MockTransport>) -> PersonalityInsightsService {
	mock_client(transport)
		.personality_insights(mock_target(ServiceKind::PersonalityInsights))
		.expect("personality insights target")
}

// endregion: --- Common Clients

// region:    --- Tracing

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize tracing once. `RUST_LOG=clarety=debug cargo test -- --nocapture` to see it.
pub fn init_tracing() {
	let _ = FmtSubscriber::builder()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Tracing
