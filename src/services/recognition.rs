//! Recognition Client for PlantLens.
//!
//! Sends one captured frame plus a fixed instruction to the Gemini
//! `generateContent` endpoint with a declared JSON response schema, then
//! parses the returned text into a `PlantProfile`. The returned payload is
//! treated as untrusted text: the declared schema is a request, not a
//! guarantee. No retry logic; a failed attempt is surfaced to the caller.

use serde_json::{json, Value};

use crate::types::capture::CapturedImage;
use crate::types::errors::RecognitionError;
use crate::types::plant::PlantProfile;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const INSTRUCTION: &str = "Identify this plant and return information in \
Traditional Chinese (Taiwan). Be creative and fun with the trivia.";

/// Trait defining the recognition capability.
///
/// The external inference service sits behind this seam so tests can
/// substitute a fake without any network dependency.
#[allow(async_fn_in_trait)]
pub trait Recognizer {
    async fn recognize(&self, image: &CapturedImage) -> Result<PlantProfile, RecognitionError>;
}

/// Recognition client backed by the Gemini API over reqwest.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request body for one identification: the inline JPEG, the fixed
    /// instruction, and the declared response schema with all fields required.
    pub fn request_body(image: &CapturedImage) -> Value {
        json!({
            "contents": [{
                "parts": [
                    {
                        "inline_data": {
                            "mime_type": "image/jpeg",
                            "data": image.as_base64()
                        }
                    },
                    { "text": INSTRUCTION }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "scientificName": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "trivia": { "type": "STRING" },
                        "difficulty": { "type": "INTEGER", "description": "1-3 stars rating" },
                        "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "careGuide": {
                            "type": "OBJECT",
                            "properties": {
                                "light": { "type": "STRING" },
                                "water": { "type": "STRING" },
                                "temperature": { "type": "STRING" }
                            },
                            "required": ["light", "water", "temperature"]
                        }
                    },
                    "required": [
                        "name", "scientificName", "description", "trivia",
                        "careGuide", "difficulty", "tags"
                    ]
                }
            }
        })
    }
}

impl Recognizer for GeminiClient {
    async fn recognize(&self, image: &CapturedImage) -> Result<PlantProfile, RecognitionError> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        tracing::debug!(model = %self.model, "sending recognition request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(image))
            .send()
            .await
            .map_err(|e| RecognitionError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecognitionError::NetworkError(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| RecognitionError::NetworkError(e.to_string()))?;

        let text = extract_text(&payload)?;
        parse_profile(&text)
    }
}

/// Pulls the generated text out of a `generateContent` response envelope.
///
/// Concatenates the text parts of the first candidate; a response with no
/// text parts counts as empty.
pub fn extract_text(payload: &Value) -> Result<String, RecognitionError> {
    let parts = payload
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array());

    let text: String = match parts {
        Some(parts) => parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect(),
        None => String::new(),
    };

    if text.trim().is_empty() {
        return Err(RecognitionError::EmptyResponse);
    }
    Ok(text)
}

/// Parses the model's JSON text into a `PlantProfile` skeleton.
///
/// Two-stage parse so the failure reason is precise: unparseable text is
/// `MalformedJson`, parseable JSON that misses a required field (for example
/// `careGuide.water`) is `SchemaViolation`.
pub fn parse_profile(text: &str) -> Result<PlantProfile, RecognitionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RecognitionError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| RecognitionError::MalformedJson(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| RecognitionError::SchemaViolation(e.to_string()))
}
