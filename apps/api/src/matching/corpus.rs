//! Corpus Builder: what a candidate is known to know, as a flat token set.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::matching::synonyms::expand_aliases;
use crate::matching::tokenizer::{normalize, tokenize};
use crate::models::candidate::{Experience, Skill};

/// Normalized tokens representing a candidate's skills and work history.
///
/// Built once per candidate and then only read; scoring many jobs against the
/// same corpus is the intended reuse. Equality is set equality, so input order
/// never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateCorpus {
    tokens: BTreeSet<String>,
}

impl CandidateCorpus {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Collects raw tokens into a corpus. Each token is normalized and blank
/// ones are dropped, since an empty token would be a substring of every term.
impl FromIterator<String> for CandidateCorpus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|token| normalize(&token))
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }
}

/// Builds the corpus from declared skills and experience entries.
///
/// Skill names are normalized as a whole and alias-expanded. Experience text
/// is tokenized only; aliases for free text are resolved at match time.
pub fn build_corpus(skills: &[Skill], experiences: &[Experience]) -> CandidateCorpus {
    let mut tokens = BTreeSet::new();

    for skill in skills {
        let norm = normalize(&skill.name);
        if norm.is_empty() {
            continue;
        }
        expand_aliases(&norm, &mut tokens);
        tokens.insert(norm);
    }

    for experience in experiences {
        tokens.extend(tokenize(&experience.position));
        tokens.extend(tokenize(&experience.description));
    }

    CandidateCorpus { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherConfig;
    use crate::matching::presence::skill_present;

    fn skills(names: &[&str]) -> Vec<Skill> {
        names.iter().map(|n| Skill::new(*n)).collect()
    }

    #[test]
    fn test_skill_names_are_normalized_and_expanded() {
        let corpus = build_corpus(&skills(&["  Spring Boot ", "JS"]), &[]);
        assert!(corpus.contains("spring boot"));
        assert!(corpus.contains("springframework"));
        assert!(corpus.contains("js"));
        assert!(corpus.contains("javascript"));
    }

    #[test]
    fn test_experience_text_is_tokenized_without_alias_expansion() {
        let corpus = build_corpus(
            &[],
            &[Experience::new("Backend Developer", "Built services with k8s")],
        );
        assert!(corpus.contains("backend"));
        assert!(corpus.contains("developer"));
        assert!(corpus.contains("k8s"));
        assert!(!corpus.contains("kubernetes"));
        assert!(!corpus.contains("with"));
    }

    #[test]
    fn test_blank_skill_names_are_skipped() {
        let corpus = build_corpus(&skills(&["", "   ", "!!"]), &[]);
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_empty_inputs_give_empty_corpus() {
        let corpus = build_corpus(&[], &[]);
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }

    #[test]
    fn test_collected_corpus_drops_blank_tokens() {
        let corpus: CandidateCorpus = ["", "  ", "Rust ", "?!"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(corpus.len(), 1);
        assert!(corpus.contains("rust"));
        assert!(!skill_present("cobol", &corpus, &MatcherConfig::default()));
    }

    #[test]
    fn test_build_is_order_independent_and_idempotent() {
        let exps = vec![
            Experience::new("Data Engineer", "Airflow pipelines"),
            Experience::new("Analyst", "Reporting in SQL"),
        ];
        let mut reversed_exps = exps.clone();
        reversed_exps.reverse();

        let a = build_corpus(&skills(&["Python", "Docker", "python"]), &exps);
        let b = build_corpus(&skills(&["Docker", "python"]), &reversed_exps);
        assert_eq!(a, b);
        assert_eq!(a, build_corpus(&skills(&["Python", "Docker", "python"]), &exps));
    }
}
