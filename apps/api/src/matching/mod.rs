//! Candidate–job compatibility matching.
//!
//! Everything here is a pure function of its inputs: no I/O, no locks, no
//! mutable globals. A [`CandidateCorpus`] is built once per candidate and can
//! be shared across threads while it is scored against any number of jobs.

pub mod corpus;
pub mod handlers;
pub mod keywords;
pub mod presence;
pub mod profile;
pub mod scorer;
pub mod synonyms;
pub mod tokenizer;

use thiserror::Error;

use crate::config::MatcherConfig;
use crate::models::candidate::{Experience, Skill};
use crate::models::job::JobRequirement;

pub use corpus::{build_corpus, CandidateCorpus};
pub use profile::{score_profile, ProfileSignals};
pub use scorer::{MatchResult, MatchTier, RankedJob};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// The engine as a value: tuning constants plus the scoring operations.
///
/// Carries no identity or state beyond its config, so it is `Copy` and can be
/// handed to every worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn build_corpus(&self, skills: &[Skill], experiences: &[Experience]) -> CandidateCorpus {
        build_corpus(skills, experiences)
    }

    pub fn skill_present(&self, required: &str, corpus: &CandidateCorpus) -> bool {
        presence::skill_present(required, corpus, &self.config)
    }

    pub fn extract_keywords(&self, description: &str, title: &str) -> Vec<String> {
        keywords::extract_keywords(description, title, &self.config)
    }

    pub fn score(&self, corpus: &CandidateCorpus, job: &JobRequirement) -> MatchResult {
        scorer::score(
            corpus,
            &job.required_skills,
            &job.description,
            &job.title,
            &self.config,
        )
    }

    pub fn score_only(&self, corpus: &CandidateCorpus, job: &JobRequirement) -> u32 {
        scorer::score_only(
            corpus,
            &job.required_skills,
            &job.description,
            &job.title,
            &self.config,
        )
    }

    /// Builds the corpus and scores it in one go, for single comparisons.
    pub fn score_candidate(
        &self,
        skills: &[Skill],
        experiences: &[Experience],
        job: &JobRequirement,
    ) -> MatchResult {
        let corpus = build_corpus(skills, experiences);
        self.score(&corpus, job)
    }

    pub fn rank_jobs(&self, corpus: &CandidateCorpus, jobs: &[JobRequirement]) -> Vec<RankedJob> {
        scorer::rank_jobs(corpus, jobs, &self.config)
    }

    pub fn score_profile(&self, signals: &ProfileSignals) -> u32 {
        score_profile(signals)
    }
}
