//! Candidate–job compatibility matching engine and its HTTP host.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;

pub use config::{Config, MatcherConfig};
pub use matching::{
    build_corpus, score_profile, CandidateCorpus, MatchError, MatchResult, MatchTier, Matcher,
    ProfileSignals, RankedJob,
};
pub use models::{CandidateProfile, Experience, JobRequirement, Skill};
