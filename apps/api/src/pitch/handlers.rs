//! Axum route handler for pitch asset generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::project::ProjectProfile;
use crate::pitch::prompts::{self, AssetType};
use crate::state::AppState;

/// Token ceiling for pitch asset completions.
const MAX_TOKENS: u32 = 900;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratePitchRequest {
    pub project: ProjectProfile,
    pub asset_type: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratePitchResponse {
    pub content: String,
}

/// POST /generate-pitch
///
/// Renders the selected asset template and returns the raw model text —
/// pitch assets are free text, so no normalization pass here.
pub async fn handle_generate_pitch(
    State(state): State<AppState>,
    Json(request): Json<GeneratePitchRequest>,
) -> Result<Json<GeneratePitchResponse>, AppError> {
    let asset = AssetType::parse(&request.asset_type)
        .ok_or_else(|| AppError::UnknownAssetType(request.asset_type.clone()))?;

    info!("Generating pitch asset {asset:?}");

    let prompt = prompts::render(asset, &request.project);
    let content = state.llm.complete(&prompt, MAX_TOKENS).await?;

    Ok(Json(GeneratePitchResponse { content }))
}
