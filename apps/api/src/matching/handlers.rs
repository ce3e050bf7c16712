//! Axum route handlers for the Matching API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::profile::ProfileSignals;
use crate::matching::scorer::{MatchResult, RankedJob};
use crate::models::candidate::{CandidateProfile, Experience, Skill};
use crate::models::job::JobRequirement;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    pub job: JobRequirement,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<MatchResult> for MatchResponse {
    fn from(result: MatchResult) -> Self {
        let tier = result.tier();
        Self {
            result,
            label: tier.label(),
            color: tier.color_hex(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchMatchRequest {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    pub jobs: Vec<JobRequirement>,
}

#[derive(Debug, Serialize)]
pub struct BatchMatchResponse {
    pub corpus_size: usize,
    pub results: Vec<RankedJob>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileScoreRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub skill_count: usize,
    #[serde(default)]
    pub experience_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ProfileScoreResponse {
    pub score: u32,
    pub signals: ProfileSignals,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores one candidate against one job. A candidate with no skills and no
/// experience gets the empty result (score 0, nothing evaluated).
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload?;
    let result = state
        .matcher
        .score_candidate(&request.skills, &request.experiences, &request.job);
    Ok(Json(result.into()))
}

/// POST /api/v1/match/batch
///
/// Builds the candidate corpus once and ranks every job against it.
pub async fn handle_batch_match(
    State(state): State<AppState>,
    payload: Result<Json<BatchMatchRequest>, JsonRejection>,
) -> Result<Json<BatchMatchResponse>, AppError> {
    let Json(request) = payload?;
    let max = state.config.max_batch_jobs;
    if request.jobs.len() > max {
        return Err(AppError::Validation(format!(
            "at most {max} jobs can be scored per request, got {}",
            request.jobs.len()
        )));
    }

    let corpus = state
        .matcher
        .build_corpus(&request.skills, &request.experiences);
    if corpus.is_empty() {
        tracing::debug!("empty candidate corpus; every job scores 0");
    }
    let results = state.matcher.rank_jobs(&corpus, &request.jobs);

    Ok(Json(BatchMatchResponse {
        corpus_size: corpus.len(),
        results,
    }))
}

/// POST /api/v1/profile/score
pub async fn handle_profile_score(
    State(state): State<AppState>,
    payload: Result<Json<ProfileScoreRequest>, JsonRejection>,
) -> Result<Json<ProfileScoreResponse>, AppError> {
    let Json(request) = payload?;
    let signals = ProfileSignals::from_profile(
        &request.profile,
        request.skill_count,
        request.experience_count,
    );
    Ok(Json(ProfileScoreResponse {
        score: state.matcher.score_profile(&signals),
        signals,
    }))
}
