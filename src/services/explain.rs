//! Remote explanation bridge: asks a text-generation service to explain one
//! workflow step. Non-throwing by contract; a missing credential or any
//! transport/decoding failure maps to a fixed fallback string, so the
//! diagram stays interactive even when the service is entirely unavailable.

use js_sys::Reflect;
use log::warn;
use serde::Deserialize;
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Window global the hosting page sets to supply the credential.
const API_KEY_GLOBAL: &str = "GEMINI_API_KEY";

const MODEL: &str = "gemini-2.5-flash";

/// Returned when no credential is configured.
pub const MISSING_KEY_FALLBACK: &str =
	"API key is missing. Please configure the GEMINI_API_KEY global.";

/// Returned on any transport or decoding failure.
pub const FAILURE_FALLBACK: &str = "Unable to generate explanation at this time.";

const SYSTEM_INSTRUCTION: &str = "You are a technical solutions architect explaining an \
	automated data sync workflow between BigCommerce (Source) and Shopify (Destination). \
	Explain the technical implications, API considerations (rate limits, status codes), \
	and data mapping logic concisely.";

#[derive(Deserialize)]
struct GenerateResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
	content: Content,
}

#[derive(Deserialize)]
struct Content {
	#[serde(default)]
	parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
	#[serde(default)]
	text: String,
}

/// Ask the service to explain one workflow step. Never fails: every error
/// path resolves to a fallback string instead of propagating.
pub async fn explain_step(step_name: &str, description: &str) -> String {
	let Some(key) = api_key() else {
		return MISSING_KEY_FALLBACK.to_string();
	};
	match request_explanation(&key, step_name, description).await {
		Ok(text) => text,
		Err(err) => {
			warn!("explanation request failed: {err:?}");
			FAILURE_FALLBACK.to_string()
		}
	}
}

fn api_key() -> Option<String> {
	let window = web_sys::window()?;
	Reflect::get(window.as_ref(), &JsValue::from_str(API_KEY_GLOBAL))
		.ok()?
		.as_string()
		.filter(|key| !key.is_empty())
}

async fn request_explanation(
	key: &str,
	step_name: &str,
	description: &str,
) -> Result<String, JsValue> {
	let url = format!(
		"https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={key}"
	);
	let prompt = format!(
		"Task: Explain a step in the 'BigCommerce to Shopify Customer Sync' workflow.\n\n\
		Step Name: \"{step_name}\"\n\
		Technical Description: {description}\n\n\
		Please provide:\n\
		1. What is technically happening here (1-2 sentences).\n\
		2. A 'Pro Tip' or potential pitfall (e.g., API limits, data formatting issues).\n\n\
		Keep it professional, concise, and helpful for a developer. Plain text only."
	);
	let body = json!({
		"system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
		"contents": [{ "parts": [{ "text": prompt }] }],
	});

	let opts = RequestInit::new();
	opts.set_method("POST");
	opts.set_body(&JsValue::from_str(&body.to_string()));
	let request = Request::new_with_str_and_init(&url, &opts)?;
	request.headers().set("Content-Type", "application/json")?;

	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
	}
	let text = JsFuture::from(response.text()?)
		.await?
		.as_string()
		.ok_or_else(|| JsValue::from_str("non-text body"))?;

	let parsed: GenerateResponse =
		serde_json::from_str(&text).map_err(|err| JsValue::from_str(&err.to_string()))?;
	parsed
		.candidates
		.into_iter()
		.next()
		.and_then(|c| c.content.parts.into_iter().next())
		.map(|p| p.text)
		.filter(|t| !t.is_empty())
		.ok_or_else(|| JsValue::from_str("empty response"))
}
