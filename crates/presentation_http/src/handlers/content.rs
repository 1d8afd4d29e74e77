//! Content generation handler

use axum::{Json, extract::State};
use domain::{ArtifactKind, StudyBundle};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Generate-content request body
#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    /// Article text to convert
    pub article: String,
    /// Requested artifact kinds
    pub types: Vec<String>,
}

/// Handle a content-generation request
///
/// Unknown type strings, an empty article, or an empty type list are
/// rejected with 400. Provider failures never produce a non-200 here;
/// they surface as placeholder values inside the bundle.
#[instrument(skip(state, request), fields(article_len = request.article.len(), types = request.types.len()))]
pub async fn generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<StudyBundle>, ApiError> {
    let kinds = request
        .types
        .iter()
        .map(|t| t.parse::<ArtifactKind>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let bundle = state.study_kit.generate_content(&request.article, &kinds).await?;

    Ok(Json(bundle))
}
