//! The search orchestrator: prompt, one collaborator call, then the
//! synchronous extract, normalize and sort pipeline.

use prospector_core::{AppConfig, ExtractStrategy, LeadCollection, SearchParams};

use crate::collaborator::{SearchCollaborator, SearchRequest};
use crate::error::SearchError;
use crate::extract::extract_with_strategy;
use crate::normalize::normalize_all;
use crate::sort::sort_by_stars;

/// Knobs for how a search talks to the service and reads its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub extract_strategy: ExtractStrategy,
    pub maps_grounding: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            extract_strategy: ExtractStrategy::BracketSpan,
            maps_grounding: true,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            extract_strategy: config.extract_strategy,
            maps_grounding: config.maps_grounding,
        }
    }
}

/// Builds the single Spanish prompt sent for `params`.
#[must_use]
pub fn build_prompt(params: &SearchParams) -> String {
    format!(
        "Busca {limit} negocios de tipo \"{query}\" en {city} que no tengan página web \
         propia, usando Google Maps.\n\
         Para cada negocio devuelve un objeto con las claves \"nombre\", \"direccion\", \
         \"telefono\", \"enlaceMaps\", \"email\" y \"estrellas\".\n\
         \"estrellas\" es obligatorio y debe ser un número entero del 1 al 5 con la \
         valoración media del negocio.\n\
         Si no encuentras un dato, omite la clave o usa null; no inventes emails.\n\
         Responde únicamente con un array JSON válido, sin texto adicional ni bloques de código.",
        limit = params.limit(),
        query = params.query(),
        city = params.city(),
    )
}

/// Runs one search with the default options.
///
/// # Errors
///
/// See [`run_search_with`].
pub async fn run_search<S>(service: &S, params: &SearchParams) -> Result<LeadCollection, SearchError>
where
    S: SearchCollaborator + ?Sized,
{
    run_search_with(service, params, &SearchOptions::default()).await
}

/// Runs one search: a single call to `service`, then extraction,
/// normalization and sorting. All or nothing.
///
/// # Errors
///
/// Returns [`SearchError::Collaborator`] if the service call fails and
/// [`SearchError::MalformedResponse`] if its text holds no usable JSON array.
#[tracing::instrument(
    skip(service, params, options),
    fields(query = %params.query(), city = %params.city(), limit = params.limit())
)]
pub async fn run_search_with<S>(
    service: &S,
    params: &SearchParams,
    options: &SearchOptions,
) -> Result<LeadCollection, SearchError>
where
    S: SearchCollaborator + ?Sized,
{
    let request = SearchRequest {
        prompt: build_prompt(params),
        maps_grounding: options.maps_grounding,
    };

    let text = service.search(&request).await.map_err(|e| {
        tracing::warn!(error = %e, "search service call failed");
        SearchError::Collaborator(e)
    })?;

    let values = extract_with_strategy(&text, options.extract_strategy).inspect_err(|e| {
        tracing::warn!(
            error = %e,
            strategy = %options.extract_strategy,
            response_chars = text.chars().count(),
            "search response held no usable JSON array"
        );
    })?;

    let leads = sort_by_stars(normalize_all(values));
    tracing::info!(leads = leads.len(), "search completed");

    Ok(LeadCollection::new(leads))
}
