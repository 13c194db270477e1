use serde::{Deserialize, Serialize};
use serde_json::Value;

// region:    --- Models

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechModel {
	/// e.g., `en-US_BroadbandModel`
	pub name: String,
	pub language: String,
	/// Sampling rate in Hz.
	pub rate: u32,
	pub url: Option<String>,
	pub description: Option<String>,
	pub supported_features: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechModels {
	pub models: Vec<SpeechModel>,
}

// endregion: --- Models

// region:    --- RecognizeOptions

/// Query options of `recognize`. `None` fields are omitted.
#[derive(Debug, Clone, Default)]
pub struct RecognizeOptions {
	pub model: Option<String>,
	pub customization_id: Option<String>,
	pub max_alternatives: Option<u32>,
	pub word_confidence: Option<bool>,
	pub timestamps: Option<bool>,
	pub profanity_filter: Option<bool>,
	pub smart_formatting: Option<bool>,
}

/// Chainable Setters
impl RecognizeOptions {
	#[must_use]
	pub fn with_model(mut self, model: impl Into<String>) -> Self {
		self.model = Some(model.into());
		self
	}

	#[must_use]
	pub fn with_customization_id(mut self, customization_id: impl Into<String>) -> Self {
		self.customization_id = Some(customization_id.into());
		self
	}

	#[must_use]
	pub const fn with_max_alternatives(mut self, value: u32) -> Self {
		self.max_alternatives = Some(value);
		self
	}

	#[must_use]
	pub const fn with_smart_formatting(mut self, value: bool) -> Self {
		self.smart_formatting = Some(value);
		self
	}

	#[must_use]
	pub const fn with_profanity_filter(mut self, value: bool) -> Self {
		self.profanity_filter = Some(value);
		self
	}
}

// endregion: --- RecognizeOptions

// region:    --- Recognition Results

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionAlternative {
	pub transcript: String,
	pub confidence: Option<f64>,
	/// `[word, start, end]` triples, only with `timestamps=true`.
	pub timestamps: Option<Value>,
	/// `[word, confidence]` pairs, only with `word_confidence=true`.
	pub word_confidence: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionResult {
	#[serde(rename = "final")]
	pub is_final: bool,
	pub alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionResults {
	pub results: Vec<SpeechRecognitionResult>,
	pub result_index: Option<u32>,
	pub warnings: Vec<String>,
}

// Getters
impl SpeechRecognitionResults {
	/// The best alternative of every final result, joined with a space.
	pub fn transcript(&self) -> String {
		self.results
			.iter()
			.filter(|result| result.is_final)
			.filter_map(|result| result.alternatives.first())
			.map(|alt| alt.transcript.trim())
			.filter(|text| !text.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

// endregion: --- Recognition Results

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use serde_json::json;

	#[test]
	fn test_transcript_joins_final_results() -> Result<()> {
		let results: SpeechRecognitionResults = serde_json::from_value(json!({
			"result_index": 0,
			"results": [
				{"final": true, "alternatives": [{"transcript": "hello there ", "confidence": 0.91}, {"transcript": "hello their "}]},
				{"final": false, "alternatives": [{"transcript": "how are"}]},
				{"final": true, "alternatives": [{"transcript": "what time is it "}]}
			]
		}))?;

		assert_eq!(results.transcript(), "hello there what time is it");
		Ok(())
	}

	#[test]
	fn test_transcript_empty() {
		assert_eq!(SpeechRecognitionResults::default().transcript(), "");
	}
}

// endregion: --- Tests
