//! Axum route handlers for the Matching API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::export::{export_file_name, results_to_csv};
use crate::matching::engine::{run_matching, select_strategy};
use crate::matching::types::{FileRecord, JobMatchReport, MatchResult, MatchingType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resumes: Vec<FileRecord>,
    pub jobs: Vec<FileRecord>,
    #[serde(rename = "matchingType", default)]
    pub matching_type: MatchingType,
    #[serde(rename = "customKeywords", default)]
    pub custom_keywords: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(rename = "jobFileName")]
    pub job_file_name: String,
    pub results: Vec<MatchResult>,
}

/// POST /api/v1/match
///
/// Runs the full matching process and returns one report per job description.
/// Per-cell AI failures surface as sentinel rows inside the reports; this
/// handler only fails on bad input or an unexpected top-level error.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Vec<JobMatchReport>>, AppError> {
    info!(
        resumes = request.resumes.len(),
        jobs = request.jobs.len(),
        matching_type = ?request.matching_type,
        "Starting matching run"
    );

    let strategy = select_strategy(request.matching_type, Arc::new(state.llm.clone()));

    let reports = run_matching(
        &request.resumes,
        &request.jobs,
        strategy.as_ref(),
        &request.custom_keywords,
    )
    .await?;

    Ok(Json(reports))
}

/// POST /api/v1/match/export
///
/// Renders one job's results as a downloadable CSV attachment.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.results.is_empty() {
        return Err(AppError::Validation(
            "There are no results to export".to_string(),
        ));
    }

    let csv = results_to_csv(&request.results)?;
    let file_name = export_file_name(&request.job_file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        csv,
    ))
}
