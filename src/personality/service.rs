use super::{Profile, ProfileInput, ProfileOptions};
use crate::client::{Client, ServiceTarget};
use crate::rest::{EndpointSpec, RestRequest};
use crate::Result;

const PROFILE: EndpointSpec = EndpointSpec::post("/v3/profile");

/// Handle on one Personality Insights service instance.
#[derive(Debug, Clone)]
pub struct PersonalityInsightsService {
	client: Client,
	target: ServiceTarget,
}

impl PersonalityInsightsService {
	pub(crate) fn new(client: Client, target: ServiceTarget) -> Self {
		Self { client, target }
	}

	pub fn target(&self) -> &ServiceTarget {
		&self.target
	}
}

impl PersonalityInsightsService {
	/// Build a personality profile from the user's text.
	///
	/// NOTE: The service needs at least 100 words, and answers with an error envelope below that.
	pub async fn profile(&self, input: impl Into<ProfileInput>, options: &ProfileOptions) -> Result<Profile> {
		let mut request = RestRequest::new(PROFILE)
			.query_opt("raw_scores", options.raw_scores)
			.query_opt("consumption_preferences", options.consumption_preferences);

		if let Some(language) = &options.content_language {
			request = request.header("Content-Language", language.as_str());
		}
		if let Some(language) = &options.accept_language {
			request = request.header("Accept-Language", language.as_str());
		}

		let request = match input.into() {
			ProfileInput::Content(content) => request.json_body("profile content", &content)?,
			ProfileInput::Text(text) => request.text_body(text),
		};

		self.client.exec_json(&self.target, request).await
	}
}
