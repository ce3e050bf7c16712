//! Compatibility scorer: required skills (70%) plus free-text keywords (30%).
//!
//! Both portions are coverage ratios over the candidate corpus:
//! - skill portion = matched required skills / required skills (1.0 when none required)
//! - description portion = matched keywords / extracted keywords (falls back to the
//!   skill portion when the job text yields no keywords)
//!
//! score = round(min(100, skill_portion × 70 + description_portion × 30))

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::MatcherConfig;
use crate::matching::corpus::CandidateCorpus;
use crate::matching::keywords::extract_keywords;
use crate::matching::presence::skill_present;
use crate::matching::tokenizer::normalize_list;
use crate::models::job::JobRequirement;

pub const SKILL_WEIGHT: f64 = 70.0;
pub const KEYWORD_WEIGHT: f64 = 30.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Score plus the required-skill breakdown for one candidate–job comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_required: usize,
}

impl MatchResult {
    /// The no-data result: nothing evaluated, score 0.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.score)
    }
}

/// Display band for a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    VeryGood,
    Good,
    Partial,
    Weak,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => MatchTier::Excellent,
            s if s >= 70 => MatchTier::VeryGood,
            s if s >= 50 => MatchTier::Good,
            s if s >= 30 => MatchTier::Partial,
            _ => MatchTier::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Excellent",
            MatchTier::VeryGood => "Very good",
            MatchTier::Good => "Good",
            MatchTier::Partial => "Partial",
            MatchTier::Weak => "Weak",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            MatchTier::Excellent => "#16a34a", // green
            MatchTier::VeryGood => "#2563eb",  // blue
            MatchTier::Good => "#d97706",      // amber
            MatchTier::Partial => "#ea580c",   // orange
            MatchTier::Weak => "#dc2626",      // red
        }
    }
}

/// One job's result in a batch ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job_id: Option<Uuid>,
    pub title: String,
    pub result: MatchResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores a pre-built corpus against one job's raw fields.
///
/// An empty corpus short-circuits to [`MatchResult::empty`] so that a
/// candidate with no data never gets a precise-looking percentage.
pub fn score(
    corpus: &CandidateCorpus,
    required_skills: &[String],
    description: &str,
    title: &str,
    config: &MatcherConfig,
) -> MatchResult {
    if corpus.is_empty() {
        return MatchResult::empty();
    }

    let required = normalize_list(required_skills);
    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .into_iter()
        .partition(|req| skill_present(req, corpus, config));

    let total_required = matched_skills.len() + missing_skills.len();
    let skill_portion = if total_required == 0 {
        1.0
    } else {
        matched_skills.len() as f64 / total_required as f64
    };

    let keywords = extract_keywords(description, title, config);
    let keywords_matched = keywords
        .iter()
        .filter(|kw| skill_present(kw, corpus, config))
        .count();
    let description_portion = if keywords.is_empty() {
        skill_portion
    } else {
        keywords_matched as f64 / keywords.len() as f64
    };

    let raw = skill_portion * SKILL_WEIGHT + description_portion * KEYWORD_WEIGHT;
    let score = raw.min(100.0).round() as u32;

    debug!(
        matched = matched_skills.len(),
        required = total_required,
        keywords_matched,
        keywords = keywords.len(),
        score,
        "scored candidate corpus against job"
    );

    MatchResult {
        score,
        matched_skills,
        missing_skills,
        total_required,
    }
}

/// [`score`] without the breakdown.
pub fn score_only(
    corpus: &CandidateCorpus,
    required_skills: &[String],
    description: &str,
    title: &str,
    config: &MatcherConfig,
) -> u32 {
    score(corpus, required_skills, description, title, config).score
}

/// Scores one corpus against many jobs, best match first.
///
/// The corpus is built once by the caller and only read here. Ties keep
/// their input order.
pub fn rank_jobs(
    corpus: &CandidateCorpus,
    jobs: &[JobRequirement],
    config: &MatcherConfig,
) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .iter()
        .map(|job| RankedJob {
            job_id: job.id,
            title: job.title.clone(),
            result: score(
                corpus,
                &job.required_skills,
                &job.description,
                &job.title,
                config,
            ),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
