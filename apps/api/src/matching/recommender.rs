//! Recommender — scores a batch of jobs for one candidate and keeps the top 10.

use serde::Serialize;
use serde_json::Value;

use crate::matching::scorer::{MatchResult, MatchScorer};

pub const MAX_RECOMMENDATIONS: usize = 10;

/// A job record accepted by the recommender. Only `description` is required.
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub id: Value,
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendation {
    pub job_id: Value,
    pub title: Option<String>,
    pub company: Option<String>,
    pub match_score: f64,
    pub match_details: MatchResult,
}

#[derive(Debug, Clone)]
pub struct Recommendations {
    pub recommendations: Vec<JobRecommendation>,
    /// Number of jobs scored, before truncation.
    pub total: usize,
}

/// Parses one job leniently. `Err` carries the reason the record is unusable.
pub fn parse_job(value: &Value) -> Result<JobPosting, String> {
    let object = value
        .as_object()
        .ok_or_else(|| "job must be a JSON object".to_string())?;

    let description = match object.get("description") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            return Err("job description is missing".to_string())
        }
        Some(_) => return Err("job description must be a string".to_string()),
    };

    let skills = match object.get("skills") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| "job skills must be strings".to_string())
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err("job skills must be an array".to_string()),
    };

    Ok(JobPosting {
        id: object.get("id").cloned().unwrap_or(Value::Null),
        title: string_field(value, "title"),
        company: string_field(value, "company"),
        description,
        skills,
    })
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Scores every job against the candidate, best first.
///
/// Malformed job records never abort the batch: they get an all-zero
/// `MatchResult` and sort after every well-formed job. Ties keep input order.
pub fn recommend(
    scorer: &dyn MatchScorer,
    candidate_text: &str,
    candidate_skills: &[String],
    jobs: &[Value],
) -> Recommendations {
    let mut scored: Vec<(bool, JobRecommendation)> = jobs
        .iter()
        .enumerate()
        .map(|(index, raw)| match parse_job(raw) {
            Ok(job) => {
                let details =
                    scorer.score(&job.description, candidate_text, &job.skills, candidate_skills);
                (
                    false,
                    JobRecommendation {
                        job_id: job.id,
                        title: job.title,
                        company: job.company,
                        match_score: details.overall_match,
                        match_details: details,
                    },
                )
            }
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping malformed job in recommendation batch");
                (
                    true,
                    JobRecommendation {
                        job_id: raw.get("id").cloned().unwrap_or(Value::Null),
                        title: string_field(raw, "title"),
                        company: string_field(raw, "company"),
                        match_score: 0.0,
                        match_details: MatchResult::zero(),
                    },
                )
            }
        })
        .collect();

    let total = scored.len();

    // sort_by is stable
    scored.sort_by(|(a_bad, a), (b_bad, b)| {
        a_bad.cmp(b_bad).then_with(|| b.match_score.total_cmp(&a.match_score))
    });

    let recommendations = scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(_, rec)| rec)
        .collect();

    Recommendations {
        recommendations,
        total,
    }
}
