//! Axum route handlers for the matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ApiJson, AppError};
use crate::matching::recommender::{recommend, JobRecommendation};
use crate::matching::scorer::MatchResult;
use crate::state::AppState;
use crate::taxonomy::SkillTaxonomy;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
    pub count: usize,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreRequest {
    pub job_description: Option<String>,
    pub candidate_bio: Option<String>,
    pub job_skills: Option<Vec<String>>,
    pub candidate_skills: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    pub candidate_bio: Option<String>,
    pub candidate_skills: Option<Vec<String>>,
    /// Kept as raw JSON so one bad record cannot reject the whole batch.
    pub jobs: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<JobRecommendation>,
    /// Omitted when no jobs were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: SkillTaxonomy,
    pub total_skills: usize,
}

const EXTRACTION_CONFIDENCE: f64 = 0.85;

fn require_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/extract-skills
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    let text = require_text(request.text, "Text is required")?;

    let skills = state.extractor.extract_skills(&text);
    let count = skills.len();

    Ok(Json(ExtractSkillsResponse {
        skills,
        count,
        confidence: if count > 0 { EXTRACTION_CONFIDENCE } else { 0.0 },
    }))
}

/// POST /api/match-score
pub async fn handle_match_score(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MatchScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    const MISSING: &str = "Job description and candidate bio are required";
    let job_description = require_text(request.job_description, MISSING)?;
    let candidate_bio = require_text(request.candidate_bio, MISSING)?;

    let result = state.scorer.score(
        &job_description,
        &candidate_bio,
        &request.job_skills.unwrap_or_default(),
        &request.candidate_skills.unwrap_or_default(),
    );

    Ok(Json(result))
}

/// POST /api/recommendations
///
/// Returns `{recommendations: []}` with no `total` when `jobs` is empty.
/// A missing or blank `candidateBio` is scored as empty text (text_match 0).
pub async fn handle_recommendations(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let jobs = request.jobs.unwrap_or_default();
    if jobs.is_empty() {
        return Ok(Json(RecommendationsResponse {
            recommendations: vec![],
            total: None,
        }));
    }

    let candidate_bio = request.candidate_bio.unwrap_or_default();
    let candidate_skills = request.candidate_skills.unwrap_or_default();
    let result = recommend(state.scorer.as_ref(), &candidate_bio, &candidate_skills, &jobs);

    tracing::info!(
        backend = state.scorer.backend(),
        total = result.total,
        returned = result.recommendations.len(),
        "computed recommendations"
    );

    Ok(Json(RecommendationsResponse {
        recommendations: result.recommendations,
        total: Some(result.total),
    }))
}

/// GET /api/skills/categories
pub async fn handle_skill_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.taxonomy.as_ref().clone(),
        total_skills: state.taxonomy.total_skills(),
    })
}
