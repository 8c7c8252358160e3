use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::info;

use crate::extraction;
use crate::models::{AnalysisSettings, AppState, FileUpload};
use crate::normalize;
use crate::prompt;
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_documents))
        .with_state(state)
}

/// Receives file(s) and settings, extracts text, and sends it to the model
/// for analysis. The model's JSON output is relayed as the response body.
async fn analyze_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<Value>> {
    let mut files: Vec<FileUpload> = Vec::new();
    let mut settings_raw = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "files" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidRequest(e.to_string()))?;
                files.push(FileUpload {
                    filename,
                    content_type,
                    data,
                });
            }
            "settings" => {
                settings_raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    info!(files = files.len(), "Received analysis request");

    let combined = extraction::combine_files(&files);
    if combined.is_empty() {
        return Err(AppError::Extraction);
    }

    let settings = AnalysisSettings::from_form(&settings_raw);
    let prompt = prompt::build_prompt(&combined.text, &settings);

    let raw_output = state.llm.generate_content(&prompt).await?;
    let result = normalize::parse_analysis(&raw_output)?;

    info!("Analysis completed");

    Ok(Json(result))
}
