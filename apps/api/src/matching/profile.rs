//! Candidate profile quality: an additive completeness score, 0–100.

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;

const PERSONAL_FIELD_POINTS: u32 = 5;
const POINTS_PER_SKILL: u32 = 3;
const COUNTED_SKILLS: usize = 10;
const SKILL_BONUS_THRESHOLD: usize = 5;
const SKILL_BONUS: u32 = 5;
/// (minimum experience entries, points): cumulative, not exclusive.
const EXPERIENCE_STEPS: &[(usize, u32)] = &[(1, 15), (2, 10), (3, 5)];
const CV_POINTS: u32 = 10;
const MAX_SCORE: u32 = 100;

/// Presence flags and counts the profile score is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSignals {
    pub first_name: bool,
    pub last_name: bool,
    pub phone: bool,
    pub location: bool,
    pub birth_date: bool,
    pub skill_count: usize,
    pub experience_count: usize,
    pub has_cv: bool,
}

impl ProfileSignals {
    /// Derives signals from a stored profile. Blank text counts as absent.
    pub fn from_profile(
        profile: &CandidateProfile,
        skill_count: usize,
        experience_count: usize,
    ) -> Self {
        Self {
            first_name: present(&profile.first_name),
            last_name: present(&profile.last_name),
            phone: present(&profile.phone),
            location: present(&profile.location),
            birth_date: profile.birth_date.is_some(),
            skill_count,
            experience_count,
            has_cv: present(&profile.cv_url),
        }
    }
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Scores profile completeness:
/// - 5 points per personal field (first/last name, phone, location, birth date)
/// - 3 points per skill up to 10 skills, +5 at 5 or more skills
/// - 15 / +10 / +5 points at 1 / 2 / 3 experience entries
/// - 10 points for an attached CV
pub fn score_profile(signals: &ProfileSignals) -> u32 {
    let personal = [
        signals.first_name,
        signals.last_name,
        signals.phone,
        signals.location,
        signals.birth_date,
    ]
    .iter()
    .filter(|set| **set)
    .count() as u32
        * PERSONAL_FIELD_POINTS;

    let mut skills = signals.skill_count.min(COUNTED_SKILLS) as u32 * POINTS_PER_SKILL;
    if signals.skill_count >= SKILL_BONUS_THRESHOLD {
        skills += SKILL_BONUS;
    }

    let experience: u32 = EXPERIENCE_STEPS
        .iter()
        .filter(|(min_entries, _)| signals.experience_count >= *min_entries)
        .map(|(_, points)| points)
        .sum();

    let cv = if signals.has_cv { CV_POINTS } else { 0 };

    (personal + skills + experience + cv).min(MAX_SCORE)
}
