mod support;

use crate::support::{MockTransport, Result, mock_personality, query_strings};
use clarety::personality::{Content, ProfileOptions};
use clarety::webc::{HttpMethod, WebBody, WebResponse};
use serde_json::json;

fn profile_fixture() -> serde_json::Value {
	json!({
		"processed_language": "en",
		"word_count": 153,
		"personality": [{
			"trait_id": "big5_openness",
			"name": "Openness",
			"category": "personality",
			"percentile": 0.81,
			"children": [{
				"trait_id": "facet_adventurousness",
				"name": "Adventurousness",
				"category": "personality",
				"percentile": 0.64
			}]
		}],
		"needs": [],
		"values": [],
		"warnings": []
	})
}

#[tokio::test]
async fn test_profile_from_content() -> Result<()> {
	// -- Setup & Fixtures
	let transport = MockTransport::with_responses([WebResponse::json(200, &profile_fixture())]);
	let personality = mock_personality(&transport);
	let content = Content::from_texts(["I love hiking.", "Let's try a new trail tomorrow."]);
	let options = ProfileOptions::default()
		.with_raw_scores(true)
		.with_content_language("en");

	// -- Exec
	let profile = personality.profile(content, &options).await?;

	// -- Check
	assert_eq!(profile.word_count, 153);
	let adventurousness = profile.find_trait("facet_adventurousness").ok_or("trait should be found")?;
	assert_eq!(adventurousness.name, "Adventurousness");

	let request = transport.last_request();
	assert_eq!(request.method, HttpMethod::Post);
	assert_eq!(request.url.path(), "/personality-insights/api/v3/profile");
	assert_eq!(query_strings(&request), vec!["version=2016-10-20", "raw_scores=true"]);
	assert_eq!(request.header("Content-Language"), Some("en"));
	assert_eq!(request.header("Accept-Language"), None);
	let WebBody::Json(body) = request.body else {
		return Err("expected a JSON body".into());
	};
	assert_eq!(body["contentItems"][1]["content"], "Let's try a new trail tomorrow.");
	assert_eq!(body["contentItems"][0]["contenttype"], "text/plain");

	Ok(())
}

#[tokio::test]
async fn test_profile_from_plain_text() -> Result<()> {
	// -- Setup & Fixtures
	let transport = MockTransport::with_responses([WebResponse::json(200, &profile_fixture())]);
	let personality = mock_personality(&transport);

	// -- Exec
	personality
		.profile("I love hiking and meeting new people.", &ProfileOptions::default())
		.await?;

	// -- Check
	let request = transport.last_request();
	assert_eq!(query_strings(&request), vec!["version=2016-10-20"]);
	let WebBody::Text(text) = request.body else {
		return Err("expected a text body".into());
	};
	assert_eq!(text, "I love hiking and meeting new people.");

	Ok(())
}

#[tokio::test]
async fn test_profile_too_few_words() -> Result<()> {
	// -- Setup & Fixtures
	let transport = MockTransport::with_responses([WebResponse::json(
		400,
		&json!({
			"code": 400,
			"sub_code": "S00014",
			"error": "The number of words 12 is less than the minimum number of words required for analysis: 100"
		}),
	)]);
	let personality = mock_personality(&transport);

	// -- Exec
	let err = personality
		.profile("Too short.", &ProfileOptions::default())
		.await
		.err()
		.ok_or("should fail")?;

	// -- Check
	assert_eq!(err.status(), Some(400));
	assert!(err.message().is_some_and(|m| m.starts_with("The number of words 12")));

	Ok(())
}
