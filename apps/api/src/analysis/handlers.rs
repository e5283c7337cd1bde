//! Axum route handlers for resume analysis.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::ats::{score_ats, AtsResult};
use crate::analysis::recommend::{recommend_roles, RoleRecommendation};
use crate::errors::AppError;
use crate::extraction::{extract_text, ContentCategory};
use crate::matching::skills::match_skills;
use crate::registry::Registry;
use crate::state::AppState;

const RAW_TEXT_PREVIEW_CHARS: usize = 500;
const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeText {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct JobDescription {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    /// Comma-separated skill labels.
    pub skills: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub recommendations: Vec<RoleRecommendation>,
}

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub resume: ResumeText,
    pub job: JobDescription,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload-resume-file
///
/// Multipart upload; the `file` part's content type picks the extractor.
pub async fn handle_upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SkillsResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let category = ContentCategory::from_mime(field.content_type());
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        info!("Resume upload: {} bytes as {:?}", data.len(), category);

        // PDF parsing and fuzzy matching are both CPU-bound
        let registry = Arc::clone(&state.registry);
        let threshold = state.config.match_threshold;
        let response = tokio::task::spawn_blocking(move || {
            let text = extract_text(&data, category);
            skills_response(&registry, threshold, text)
        })
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

        return Ok(Json(response));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// POST /upload-resume-text
pub async fn handle_upload_text(
    State(state): State<AppState>,
    Json(resume): Json<ResumeText>,
) -> Result<Json<SkillsResponse>, AppError> {
    let registry = Arc::clone(&state.registry);
    let threshold = state.config.match_threshold;
    let response =
        tokio::task::spawn_blocking(move || skills_response(&registry, threshold, resume.text))
            .await
            .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(response))
}

/// GET /analysis?skills=Python,SQL
///
/// Ranked career recommendations for the given skills.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Query(query): Query<AnalysisQuery>,
) -> Json<AnalysisResponse> {
    let skills = parse_skill_list(&query.skills);
    let recommendations =
        recommend_roles(&skills, &state.registry, state.advisor.as_ref()).await;
    Json(AnalysisResponse { recommendations })
}

/// POST /ats-score
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(request): Json<AtsRequest>,
) -> Json<AtsResult> {
    Json(score_ats(
        &request.resume.text,
        &request.job.text,
        state.config.keyword_policy,
    ))
}

/// Runs on a blocking thread; matching cost grows with text length.
fn skills_response(registry: &Registry, threshold: f64, text: String) -> SkillsResponse {
    let skills = match_skills(&text, &registry.catalog, threshold);
    SkillsResponse {
        skills,
        raw_text: text.chars().take(RAW_TEXT_PREVIEW_CHARS).collect(),
    }
}

fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
