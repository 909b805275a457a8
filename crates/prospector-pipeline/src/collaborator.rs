//! The seam between the pipeline and the external search service.

use async_trait::async_trait;
use prospector_gemini::GeminiClient;

/// Error type of any search service implementation.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// One request to the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub prompt: String,
    /// Enables the service's location/maps-aware search capability.
    pub maps_grounding: bool,
}

/// A service that answers a prospecting prompt with free text.
///
/// The answer is expected, but not guaranteed, to contain one JSON array of
/// candidate records. Implementations must not retry.
#[async_trait]
pub trait SearchCollaborator: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<String, CollaboratorError>;
}

#[async_trait]
impl SearchCollaborator for GeminiClient {
    async fn search(&self, request: &SearchRequest) -> Result<String, CollaboratorError> {
        let text = self
            .generate_content(&request.prompt, request.maps_grounding)
            .await?;
        Ok(text)
    }
}
