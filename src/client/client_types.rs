use crate::client::{ClientBuilder, ClientConfig, ServiceKind, ServiceTarget};
use crate::conversation::ConversationService;
use crate::personality::PersonalityInsightsService;
use crate::speech_to_text::SpeechToTextService;
use crate::text_to_speech::TextToSpeechService;
use crate::webc::WebTransport;
use crate::{Error, Result};
use std::sync::Arc;

/// The client holding the transport, shared by every service handle.
///
/// Cheap to clone. Holds no mutable state.
#[derive(Clone)]
pub struct Client {
	pub(super) inner: Arc<ClientInner>,
}

pub(super) struct ClientInner {
	pub(super) transport: Arc<dyn WebTransport>,
	pub(super) config: ClientConfig,
}

/// Constructors
impl Client {
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	pub(crate) fn new(transport: Arc<dyn WebTransport>, config: ClientConfig) -> Self {
		Self {
			inner: Arc::new(ClientInner { transport, config }),
		}
	}
}

/// Getters
impl Client {
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}
}

/// Service handles
impl Client {
	pub fn conversation(&self, target: ServiceTarget) -> Result<ConversationService> {
		ensure_kind(&target, ServiceKind::Conversation)?;
		Ok(ConversationService::new(self.clone(), target))
	}

	pub fn speech_to_text(&self, target: ServiceTarget) -> Result<SpeechToTextService> {
		ensure_kind(&target, ServiceKind::SpeechToText)?;
		Ok(SpeechToTextService::new(self.clone(), target))
	}

	pub fn text_to_speech(&self, target: ServiceTarget) -> Result<TextToSpeechService> {
		ensure_kind(&target, ServiceKind::TextToSpeech)?;
		Ok(TextToSpeechService::new(self.clone(), target))
	}

	pub fn personality_insights(&self, target: ServiceTarget) -> Result<PersonalityInsightsService> {
		ensure_kind(&target, ServiceKind::PersonalityInsights)?;
		Ok(PersonalityInsightsService::new(self.clone(), target))
	}
}

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Client").field("config", &self.inner.config).finish_non_exhaustive()
	}
}

fn ensure_kind(target: &ServiceTarget, expected: ServiceKind) -> Result<()> {
	if target.kind == expected {
		Ok(())
	} else {
		Err(Error::ServiceKindMismatch {
			expected,
			actual: target.kind,
		})
	}
}
