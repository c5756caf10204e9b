//! Match Scorer — pluggable, trait-based scorer for a (job, candidate) pair.
//!
//! Default: `TfIdfMatchScorer` (lexical TF-IDF cosine + skill-overlap ratio).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, built once at startup.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::tfidf::{text_similarity, TfidfVectorizer, DEFAULT_MAX_FEATURES};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Composite score for one job/candidate pair. All percentages are 0 – 100,
/// rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_match: f64,
    pub skill_match: f64,
    pub text_match: f64,
    pub matching_skills: BTreeSet<String>,
}

impl MatchResult {
    pub fn zero() -> Self {
        Self {
            overall_match: 0.0,
            skill_match: 0.0,
            text_match: 0.0,
            matching_skills: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skill: f64,
    pub text: f64,
    /// Vocabulary cap for the TF-IDF vectors.
    pub max_features: usize,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill: 0.6,
            text: 0.4,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers or the
/// recommender. Empty skill slices mean "no skill data".
pub trait MatchScorer: Send + Sync {
    fn score(
        &self,
        job_text: &str,
        candidate_text: &str,
        job_skills: &[String],
        candidate_skills: &[String],
    ) -> MatchResult;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TfIdfMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. text_match = TF-IDF cosine over {job, candidate} × 100
/// 2. skill_match = |job ∩ candidate| / |job| × 100 (lowercased; 0 if either is empty)
/// 3. overall = skill×0.6 + text×0.4 when skill_match > 0, else text_match
pub struct TfIdfMatchScorer {
    vectorizer: TfidfVectorizer,
    weights: MatchWeights,
}

impl TfIdfMatchScorer {
    pub fn new(weights: MatchWeights) -> Result<Self, regex::Error> {
        Ok(Self {
            vectorizer: TfidfVectorizer::new(weights.max_features)?,
            weights,
        })
    }
}

impl MatchScorer for TfIdfMatchScorer {
    fn score(
        &self,
        job_text: &str,
        candidate_text: &str,
        job_skills: &[String],
        candidate_skills: &[String],
    ) -> MatchResult {
        let text_match = text_similarity(&self.vectorizer, job_text, candidate_text) * 100.0;
        let (skill_match, matching_skills) = skill_overlap(job_skills, candidate_skills);
        let overall_match = composite(skill_match, text_match, &self.weights);

        tracing::debug!(
            overall_match,
            skill_match,
            text_match,
            matched = matching_skills.len(),
            "scored job/candidate pair"
        );

        MatchResult {
            overall_match: to_percentage(overall_match),
            skill_match: to_percentage(skill_match),
            text_match: to_percentage(text_match),
            matching_skills,
        }
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

/// Share of the job's skills the candidate has, plus the lowercase intersection.
/// Relative to the job's set only.
fn skill_overlap(job_skills: &[String], candidate_skills: &[String]) -> (f64, BTreeSet<String>) {
    if job_skills.is_empty() || candidate_skills.is_empty() {
        return (0.0, BTreeSet::new());
    }

    let job: BTreeSet<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let candidate: BTreeSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let matching: BTreeSet<String> = job.intersection(&candidate).cloned().collect();

    let ratio = matching.len() as f64 / job.len() as f64 * 100.0;
    (ratio, matching)
}

/// Zero skill overlap falls back to pure text similarity, same as no skill data.
fn composite(skill_match: f64, text_match: f64, weights: &MatchWeights) -> f64 {
    if skill_match > 0.0 {
        skill_match * weights.skill + text_match * weights.text
    } else {
        text_match
    }
}

fn to_percentage(value: f64) -> f64 {
    let clamped = value.clamp(0.0, 100.0);
    (clamped * 100.0).round() / 100.0
}
