use crate::config::Config;
use crate::matching::Matcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless engine carrying the tuning constants from `config.matcher`.
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, crate::matching::MatchError> {
        let matcher = Matcher::new(config.matcher)?;
        Ok(Self { config, matcher })
    }
}
