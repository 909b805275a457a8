//! Gemini `generateContent` wire types.
//!
//! Only the fields Prospector reads or writes are modelled. Everything on the
//! response side is optional because the API omits empty fields.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of a `models/{model}:generateContent` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// A single-turn user prompt, with the Google Maps tool when `maps_grounding` is set.
    #[must_use]
    pub fn user_prompt(prompt: &str, maps_grounding: bool) -> Self {
        let tools = if maps_grounding {
            vec![Tool {
                google_maps: Some(GoogleMaps {}),
            }]
        } else {
            Vec::new()
        };
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            tools,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<GoogleMaps>,
}

/// Enables grounding with Google Maps. Serializes as `{}`.
#[derive(Debug, Default, Serialize)]
pub struct GoogleMaps {}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when there is no text.
    #[must_use]
    pub fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// Error envelope returned with non-2xx statuses: `{"error": {...}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_with_grounding_includes_google_maps_tool() {
        let req = GenerateContentRequest::user_prompt("busca bares", true);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "busca bares");
        assert_eq!(json["tools"][0]["googleMaps"], serde_json::json!({}));
    }

    #[test]
    fn request_without_grounding_omits_tools() {
        let req = GenerateContentRequest::user_prompt("busca bares", false);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn first_candidate_text_joins_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "[{\"nombre\":"}, {"text": "\"Bar\"}]"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(
            resp.first_candidate_text().as_deref(),
            Some("[{\"nombre\":\"Bar\"}]")
        );
    }

    #[test]
    fn first_candidate_text_is_none_without_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.first_candidate_text().is_none());
    }

    #[test]
    fn first_candidate_text_is_none_for_empty_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{}]}, "finishReason": "MAX_TOKENS"}]
        }))
        .unwrap();
        assert!(resp.first_candidate_text().is_none());
    }
}
