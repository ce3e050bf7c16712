use anyhow::{Context, Result};

use crate::matching::MatchError;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_batch_jobs: usize,
    pub matcher: MatcherConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let matcher = MatcherConfig::from_env()?;
        matcher.validate()?;

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_batch_jobs: parse_env("MAX_BATCH_JOBS", 500)?,
            matcher,
        })
    }
}

/// Tuning constants of the matching heuristics.
///
/// Defaults reproduce the established scoring behaviour. The 70/30
/// skill/keyword weighting is fixed and not part of this config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Shared leading characters that count as a weak match ("program" ~ "programming").
    pub prefix_match_len: usize,
    /// Raw title + description tokens collected before alias expansion.
    pub raw_keyword_cap: usize,
    /// Keywords kept after alias expansion.
    pub keyword_cap: usize,
    /// Description tokens longer than this are ignored.
    pub max_keyword_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            prefix_match_len: 5,
            raw_keyword_cap: 40,
            keyword_cap: 25,
            max_keyword_len: 30,
        }
    }
}

impl MatcherConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            prefix_match_len: parse_env("PREFIX_MATCH_LEN", defaults.prefix_match_len)?,
            raw_keyword_cap: parse_env("RAW_KEYWORD_CAP", defaults.raw_keyword_cap)?,
            keyword_cap: parse_env("KEYWORD_CAP", defaults.keyword_cap)?,
            max_keyword_len: parse_env("MAX_KEYWORD_LEN", defaults.max_keyword_len)?,
        })
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        let fields = [
            ("prefix_match_len", self.prefix_match_len),
            ("raw_keyword_cap", self.raw_keyword_cap),
            ("keyword_cap", self.keyword_cap),
            ("max_keyword_len", self.max_keyword_len),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(MatchError::InvalidArgument(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
