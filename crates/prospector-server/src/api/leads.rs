//! Search, listing and CSV export of the session's leads.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use prospector_core::{LeadCollection, SearchParams, DEFAULT_CITY, DEFAULT_LIMIT, DEFAULT_QUERY};
use prospector_pipeline::{CsvExport, SessionError};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Missing fields fall back to the default search.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(in crate::api) struct SearchRequestBody {
    pub query: Option<String>,
    pub city: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct LeadsData {
    pub count: usize,
    pub leads: LeadCollection,
}

impl From<LeadCollection> for LeadsData {
    fn from(leads: LeadCollection) -> Self {
        Self {
            count: leads.len(),
            leads,
        }
    }
}

/// POST /api/v1/search — run a search and replace the session's leads.
pub(in crate::api) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<SearchRequestBody>, JsonRejection>,
) -> Result<Json<ApiResponse<LeadsData>>, ApiError> {
    let rid = req_id.0;

    let Json(body) =
        body.map_err(|e| ApiError::new(&rid, "validation_error", e.body_text()))?;

    let params = SearchParams::new(
        body.query.as_deref().unwrap_or(DEFAULT_QUERY),
        body.city.as_deref().unwrap_or(DEFAULT_CITY),
        body.limit.unwrap_or(DEFAULT_LIMIT),
    )
    .map_err(|e| ApiError::new(&rid, "validation_error", e.to_string()))?;

    match state.session.search(&params).await {
        Ok(collection) => Ok(Json(ApiResponse {
            data: collection.into(),
            meta: ResponseMeta::new(rid),
        })),
        Err(SessionError::Busy) => Err(ApiError::new(
            rid,
            "conflict",
            "a search is already in progress",
        )),
        Err(SessionError::Search(e)) => {
            tracing::warn!(request_id = %rid, error = %e, "search failed");
            Err(ApiError::new(rid, "search_failed", e.user_message()))
        }
    }
}

/// GET /api/v1/leads — the leads of the last successful search.
pub(in crate::api) async fn list_leads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<LeadsData>> {
    Json(ApiResponse {
        data: state.session.leads().await.into(),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// GET /api/v1/leads/export — CSV download, or 204 when there is nothing to
/// export.
pub(in crate::api) async fn export_leads(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let export = state.session.export_csv().await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "CSV export failed");
        ApiError::new(&req_id.0, "internal_error", "failed to render CSV")
    })?;

    let Some(CsvExport { file_name, csv }) = export else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
