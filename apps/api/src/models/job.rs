use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The parts of a job offer the matcher reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    /// Caller-side identifier, echoed back by batch ranking.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title: String,
}

impl JobRequirement {
    pub fn new(
        required_skills: &[&str],
        description: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            description: description.into(),
            title: title.into(),
        }
    }
}
