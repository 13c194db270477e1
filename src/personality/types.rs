use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// region:    --- Content

/// One piece of text authored by the user (e.g., one chat utterance).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItem {
	pub content: String,
	pub id: Option<String>,
	/// Milliseconds since the epoch.
	pub created: Option<i64>,
	pub updated: Option<i64>,
	/// `text/plain` or `text/html`.
	pub contenttype: Option<String>,
	pub language: Option<String>,
	pub parentid: Option<String>,
	pub reply: Option<bool>,
	pub forward: Option<bool>,
}

impl ContentItem {
	pub fn from_text(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			contenttype: Some("text/plain".to_string()),
			..Default::default()
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
	#[serde(rename = "contentItems")]
	pub content_items: Vec<ContentItem>,
}

impl Content {
	pub fn from_texts<I, S>(texts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			content_items: texts.into_iter().map(ContentItem::from_text).collect(),
		}
	}
}

/// The input of `profile`.
#[derive(Debug, Clone)]
pub enum ProfileInput {
	Content(Content),
	/// Sent as `text/plain`.
	Text(String),
}

impl From<Content> for ProfileInput {
	fn from(content: Content) -> Self {
		Self::Content(content)
	}
}

impl From<String> for ProfileInput {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for ProfileInput {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

// endregion: --- Content

// region:    --- ProfileOptions

#[derive(Debug, Clone, Default)]
pub struct ProfileOptions {
	pub raw_scores: Option<bool>,
	pub consumption_preferences: Option<bool>,
	/// `Content-Language` of the input (`en`, `es`, `ja`, ...).
	pub content_language: Option<String>,
	/// `Accept-Language` of the trait names in the response.
	pub accept_language: Option<String>,
}

/// Chainable Setters
impl ProfileOptions {
	#[must_use]
	pub const fn with_raw_scores(mut self, value: bool) -> Self {
		self.raw_scores = Some(value);
		self
	}

	#[must_use]
	pub const fn with_consumption_preferences(mut self, value: bool) -> Self {
		self.consumption_preferences = Some(value);
		self
	}

	#[must_use]
	pub fn with_content_language(mut self, language: impl Into<String>) -> Self {
		self.content_language = Some(language.into());
		self
	}

	#[must_use]
	pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
		self.accept_language = Some(language.into());
		self
	}
}

// endregion: --- ProfileOptions

// region:    --- Profile

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityTrait {
	pub trait_id: String,
	pub name: String,
	/// `personality`, `needs`, or `values`.
	pub category: String,
	pub percentile: f64,
	pub raw_score: Option<f64>,
	pub significant: Option<bool>,
	pub children: Vec<PersonalityTrait>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
	pub trait_id: String,
	pub name: String,
	pub category: String,
	pub percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionPreference {
	pub consumption_preference_id: String,
	pub name: String,
	pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionPreferencesCategory {
	pub consumption_preference_category_id: String,
	pub name: String,
	pub consumption_preferences: Vec<ConsumptionPreference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileWarning {
	pub warning_id: String,
	pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
	pub processed_language: String,
	pub word_count: u32,
	pub word_count_message: Option<String>,
	/// The Big Five dimensions, with their facets as children.
	pub personality: Vec<PersonalityTrait>,
	pub needs: Vec<PersonalityTrait>,
	pub values: Vec<PersonalityTrait>,
	pub behavior: Vec<Behavior>,
	pub consumption_preferences: Vec<ConsumptionPreferencesCategory>,
	pub warnings: Vec<ProfileWarning>,
}

// Getters
impl Profile {
	/// Find a trait by id among the personality, needs, and values trees.
	pub fn find_trait(&self, trait_id: &str) -> Option<&PersonalityTrait> {
		fn find<'a>(traits: &'a [PersonalityTrait], trait_id: &str) -> Option<&'a PersonalityTrait> {
			traits.iter().find_map(|t| {
				if t.trait_id == trait_id {
					Some(t)
				} else {
					find(&t.children, trait_id)
				}
			})
		}

		find(&self.personality, trait_id)
			.or_else(|| find(&self.needs, trait_id))
			.or_else(|| find(&self.values, trait_id))
	}
}

// endregion: --- Profile

// region:    --- Tests


// endregion: --- Tests
