pub mod candidate;
pub mod job;

pub use candidate::{CandidateProfile, Experience, Skill};
pub use job::JobRequirement;
