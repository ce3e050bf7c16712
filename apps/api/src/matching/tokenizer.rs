//! Tokenizer & normalizer shared by corpus building and keyword extraction.
//!
//! Token characters are `[a-z0-9#+.\-/]` after lowercasing, so `c#`, `c++`,
//! `node.js` and `ci/cd` survive as single tokens. Everything else splits.

use std::collections::BTreeSet;

/// Tokens shorter than this are dropped.
pub const MIN_TOKEN_LEN: usize = 2;

/// Filler words that carry no technical meaning: articles, auxiliaries and
/// generic resume/HR vocabulary.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "in", "on", "at", "of", "to", "a", "an", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "shall", "can", "for", "with", "as", "by", "from", "that", "this",
    "it", "we", "you", "he", "she", "they", "our", "your", "their", "its", "not", "no", "but",
    "if", "so", "up", "out", "about", "more", "also", "than", "any", "all", "both", "each", "few",
    "how", "when", "where", "who", "which", "what", "why", "team", "work", "working",
    "environment", "good", "great", "strong", "using", "use", "used", "including", "include",
    "experience", "years", "knowledge", "ability", "skills", "skill", "excellent", "proficient",
    "familiar", "proficiency", "understanding", "required", "preferred", "plus", "bonus", "nice",
    "must", "need",
];

fn is_token_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '#' | '+' | '.' | '-' | '/')
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lowercases, replaces every non-token character with a space, collapses
/// whitespace and trims.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let parts: Vec<&str> = raw_tokens(&lower).collect();
    parts.join(" ")
}

/// Splits already-lowercased text on non-token characters, skipping empties.
pub(crate) fn raw_tokens(lower: &str) -> impl Iterator<Item = &str> {
    lower.split(|c: char| !is_token_char(c)).filter(|t| !t.is_empty())
}

/// Whether a raw token is worth keeping: long enough, not a stop word, not a number.
pub(crate) fn is_meaningful(token: &str) -> bool {
    token.len() >= MIN_TOKEN_LEN
        && !token.bytes().all(|b| b.is_ascii_digit())
        && !is_stop_word(token)
}

/// Yields the meaningful tokens of `text` in order of appearance, duplicates included.
pub(crate) fn meaningful_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    raw_tokens(&lower)
        .filter(|t| is_meaningful(t))
        .map(str::to_string)
        .collect()
}

/// Splits free text into its set of meaningful tokens.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    meaningful_tokens(text).into_iter().collect()
}

/// Normalizes each entry and drops the ones that end up blank. Duplicates are kept.
pub fn normalize_list<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_collapses_spaces() {
        assert_eq!(normalize("  Spring   Boot! "), "spring boot");
        assert_eq!(normalize("C#, C++ & Node.js"), "c# c++ node.js");
        assert_eq!(normalize("CI/CD"), "ci/cd");
    }

    #[test]
    fn test_normalize_blank_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  ?!  "), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("Développeur"), "d veloppeur");
    }

    #[test]
    fn test_tokenize_filters_stop_words_numbers_and_short_tokens() {
        let tokens = tokenize("We need 5 years of experience with Rust and a k8s cluster, 2024");
        let expected: BTreeSet<String> = ["rust", "k8s", "cluster"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_tokenize_keeps_symbolic_tech_terms() {
        let tokens = tokenize("Senior C# / .NET developer");
        assert!(tokens.contains("c#"));
        assert!(tokens.contains(".net"));
        assert!(tokens.contains("senior"));
        assert!(!tokens.contains("/"));
    }

    #[test]
    fn test_tokenize_is_a_set() {
        let tokens = tokenize("rust Rust RUST");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_normalize_list_drops_blanks_keeps_duplicates() {
        let list = normalize_list(&["Java", "  ", "java", "", "Docker"]);
        assert_eq!(list, vec!["java", "java", "docker"]);
    }

    #[test]
    fn test_stop_word_list_is_lowercase() {
        assert!(STOP_WORDS.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
