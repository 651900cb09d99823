//! In-memory result store.
//!
//! Holds exactly one generation of search results. Each search issues a new
//! generation; only the latest issued generation may commit, so a stale
//! response arriving after a newer one is discarded instead of overwriting
//! state.

use crate::models::Article;

/// Monotonically increasing search-request generation.
pub type Generation = u64;

/// The single current generation of fetched articles.
#[derive(Debug, Default)]
pub struct ResultStore {
    articles: Vec<Article>,
    issued: Generation,
}

impl ResultStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request generation. Call once per search, before the
    /// network call.
    pub fn issue(&mut self) -> Generation {
        self.issued += 1;
        self.issued
    }

    /// Commit results for a generation. Replaces the stored list wholesale;
    /// never merges. Returns `false` (and leaves the store untouched) when
    /// the generation is not the latest issued.
    pub fn commit(&mut self, generation: Generation, articles: Vec<Article>) -> bool {
        if generation != self.issued {
            tracing::debug!(generation, latest = self.issued, "discarding stale search results");
            return false;
        }
        self.articles = articles;
        true
    }

    /// The stored articles, in API order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of stored articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the store holds no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Sorted, deduplicated article types present in the store. Feeds the
    /// type-filter menu.
    #[must_use]
    pub fn article_types(&self) -> Vec<String> {
        let mut types: Vec<String> =
            self.articles.iter().filter_map(|a| a.article_type.clone()).collect();
        types.sort();
        types.dedup();
        types
    }
}
