//! Fuzzy resolution of free-form language tokens.
//!
//! A query is scored against every candidate with a normalized Levenshtein
//! similarity scaled to `0..=100`. The highest score wins and ties go to the
//! candidate seen first. There is no minimum score: a non-empty candidate
//! list always yields a match, so callers should echo the result back.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no candidate languages to match against")]
    EmptyCatalog,
    #[error("language name cannot be empty")]
    EmptyQuery,
}

/// What to do with an empty or whitespace-only query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyQueryPolicy {
    /// Every candidate scores 0, so the first one is returned.
    #[default]
    ScoreZero,
    /// Fail with [`ResolveError::EmptyQuery`].
    Reject,
}

/// The winning candidate of a resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub value: String,
    /// Similarity in `0.0..=100.0`; exactly `100.0` for an identical string.
    pub score: f64,
    /// Position of the winner in the candidate sequence.
    pub index: usize,
}

/// Similarity between `query` and `candidate`, ignoring case and
/// surrounding whitespace.
pub fn score(query: &str, candidate: &str) -> f64 {
    let query = query.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();
    strsim::normalized_levenshtein(&query, &candidate) * 100.0
}

/// Resolve `query` against `candidates` with the default policy.
pub fn resolve<I, S>(query: &str, candidates: I) -> Result<MatchResult, ResolveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LanguageResolver::default().resolve(query, candidates)
}

pub(crate) struct Scored<T> {
    pub index: usize,
    pub score: f64,
    pub item: T,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageResolver {
    policy: EmptyQueryPolicy,
}

impl LanguageResolver {
    pub fn with_policy(policy: EmptyQueryPolicy) -> Self {
        Self { policy }
    }

    pub fn resolve<I, S>(&self, query: &str, candidates: I) -> Result<MatchResult, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let best = self.best_by(query, candidates, |candidate| {
            score(query, candidate.as_ref())
        })?;
        Ok(MatchResult {
            value: best.item.as_ref().to_string(),
            score: best.score,
            index: best.index,
        })
    }

    /// Highest scoring item under `scorer`. Only a strictly greater score
    /// replaces the running best.
    pub(crate) fn best_by<I, T, F>(
        &self,
        query: &str,
        items: I,
        mut scorer: F,
    ) -> Result<Scored<T>, ResolveError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> f64,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return Err(ResolveError::EmptyCatalog);
        }

        let blank = query.trim().is_empty();
        if blank && self.policy == EmptyQueryPolicy::Reject {
            return Err(ResolveError::EmptyQuery);
        }

        let mut best: Option<Scored<T>> = None;
        for (index, item) in items.enumerate() {
            let score = if blank { 0.0 } else { scorer(&item) };
            let replace = match &best {
                Some(current) => score > current.score,
                None => true,
            };
            if replace {
                best = Some(Scored { index, score, item });
            }
        }

        best.ok_or(ResolveError::EmptyCatalog)
    }
}
