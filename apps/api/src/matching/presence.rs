//! Skill presence test: does the corpus cover a required term?

use crate::config::MatcherConfig;
use crate::matching::corpus::CandidateCorpus;
use crate::matching::synonyms::related_terms;
use crate::matching::tokenizer::normalize;

/// Exact or substring containment in either direction.
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Returns true when the corpus covers `required`, trying in order:
///
/// 1. exact membership of the normalized term
/// 2. substring containment against any corpus token, either direction
/// 3. any alias of the required term against any corpus token
/// 4. the required term against the aliases of any corpus token
/// 5. a shared leading prefix of `prefix_match_len` characters
///
/// The first check that holds wins. Blank terms are never present.
pub fn skill_present(required: &str, corpus: &CandidateCorpus, config: &MatcherConfig) -> bool {
    let norm = normalize(required);
    if norm.is_empty() {
        return false;
    }

    if corpus.contains(&norm) {
        return true;
    }

    if corpus.iter().any(|token| overlaps(token, &norm)) {
        return true;
    }

    // Aliases of the required term against the corpus.
    if related_terms(&norm)
        .any(|alias| corpus.contains(alias) || corpus.iter().any(|token| overlaps(token, alias)))
    {
        return true;
    }

    // Aliases of each corpus token against the required term.
    if corpus
        .iter()
        .any(|token| related_terms(token).any(|alias| overlaps(alias, &norm)))
    {
        return true;
    }

    prefix_match(&norm, corpus, config.prefix_match_len)
}

fn prefix_match(norm: &str, corpus: &CandidateCorpus, len: usize) -> bool {
    // Normalized text is ASCII, so byte slicing is char slicing.
    if norm.len() < len {
        return false;
    }
    let prefix = &norm[..len];
    corpus
        .iter()
        .any(|token| token.len() >= len && token.starts_with(prefix))
}
