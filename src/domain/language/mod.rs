pub mod catalog;
pub mod resolver;

pub use catalog::{LanguageCatalog, LanguageEntry};
pub use resolver::{resolve, score, EmptyQueryPolicy, LanguageResolver, MatchResult, ResolveError};

use serde::Serialize;

/// A language chosen for a request, echoed back to the user before any
/// network call is made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLanguage {
    pub query: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub score: f64,
}

impl ResolvedLanguage {
    pub fn from_match(query: &str, result: MatchResult, catalog: &LanguageCatalog) -> Self {
        let name = catalog.entry(result.index).map(|e| e.name.clone());
        Self {
            query: query.to_string(),
            code: result.value,
            name,
            score: result.score,
        }
    }
}

impl std::fmt::Display for ResolvedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
