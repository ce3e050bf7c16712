//! Keyword extraction from a job offer's free text.

use std::collections::HashSet;

use crate::config::MatcherConfig;
use crate::matching::synonyms::related_terms;
use crate::matching::tokenizer::meaningful_tokens;

/// Insertion-ordered set of strings.
#[derive(Default)]
struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    fn insert(&mut self, value: &str) {
        if !self.seen.contains(value) {
            self.seen.insert(value.to_string());
            self.items.push(value.to_string());
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Extracts the keywords a job's free text asks for.
///
/// Title tokens come first, then description tokens (description tokens
/// longer than `max_keyword_len` are skipped). Collection stops at
/// `raw_keyword_cap` distinct tokens. Each keyword is then followed by its
/// aliases, and the expanded list is cut to `keyword_cap`. Order of first
/// appearance is kept; frequency plays no part.
pub fn extract_keywords(description: &str, title: &str, config: &MatcherConfig) -> Vec<String> {
    let mut raw = OrderedSet::default();

    for token in meaningful_tokens(title) {
        if raw.len() >= config.raw_keyword_cap {
            break;
        }
        raw.insert(&token);
    }

    for token in meaningful_tokens(description) {
        if raw.len() >= config.raw_keyword_cap {
            break;
        }
        if token.len() <= config.max_keyword_len {
            raw.insert(&token);
        }
    }

    let mut expanded = OrderedSet::default();
    for keyword in &raw.items {
        expanded.insert(keyword);
        for alias in related_terms(keyword) {
            expanded.insert(alias);
        }
    }

    let mut keywords = expanded.items;
    keywords.truncate(config.keyword_cap);
    keywords
}
