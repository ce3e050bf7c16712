use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A declared skill on a candidate profile. Only the name is consumed by matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A work-history entry. Both fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub description: String,
}

impl Experience {
    pub fn new(position: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            description: description.into(),
        }
    }
}

/// Personal fields of a candidate profile, as handed over by the caller's store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub cv_url: Option<String>,
}
