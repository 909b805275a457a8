//! HTTP client for the Gemini `generateContent` REST endpoint.
//!
//! Wraps `reqwest` with API key handling, endpoint construction, and typed
//! response decoding. Non-2xx statuses surface as [`GeminiError::Api`] with
//! the message from the API's error envelope when one is present.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeminiError;
use crate::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";
const ERROR_BODY_PREVIEW_CHARS: usize = 300;

/// Client for Gemini content generation.
///
/// Construct once at startup and share it.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client that sends requests to `base_url`, the production
    /// API or a mock server in tests.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("prospector/0.1 (lead-search)")
            .build()?;

        let endpoint = Self::endpoint_url(base_url, model)?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint,
        })
    }

    /// Sends one prompt and returns the text of the first candidate.
    ///
    /// When `maps_grounding` is set the request carries the Google Maps tool
    /// so the model can look up real places.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx status.
    /// - [`GeminiError::Deserialize`] if the body is not the expected shape.
    /// - [`GeminiError::Blocked`] if the prompt was blocked.
    /// - [`GeminiError::EmptyResponse`] if no candidate text came back.
    pub async fn generate_content(
        &self,
        prompt: &str,
        maps_grounding: bool,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::user_prompt(prompt, maps_grounding);

        tracing::debug!(
            model = %self.model,
            maps_grounding,
            prompt_chars = prompt.chars().count(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: Self::api_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(GeminiError::Blocked(reason));
        }

        let finish_reason = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("unknown");
        let total_tokens = parsed
            .usage_metadata
            .as_ref()
            .and_then(|u| u.total_token_count);

        let text = parsed
            .first_candidate_text()
            .ok_or(GeminiError::EmptyResponse)?;

        tracing::debug!(
            model = %self.model,
            finish_reason,
            total_tokens,
            response_chars = text.chars().count(),
            "generateContent completed"
        );

        Ok(text)
    }

    /// Builds `{base}/v1beta/models/{model}:generateContent`.
    fn endpoint_url(base_url: &str, model: &str) -> Result<Url, GeminiError> {
        let invalid = |reason: String| GeminiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        base.join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| invalid(e.to_string()))
    }

    /// Extracts `error.message` from an API error body, falling back to a
    /// truncated copy of the raw body.
    fn api_error_message(body: &str) -> String {
        serde_json::from_str::<ApiErrorEnvelope>(body).map_or_else(
            |_| body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
            |envelope| envelope.error.message,
        )
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
