use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{AnnotatedOpportunity, OpportunityQuery};

/// Memoization cache for query results
///
/// Evaluation is recompute-from-scratch on every call; this cache is a pure
/// optimization over (catalog, query) equality and must never change
/// observable behavior. The catalog only changes through interest toggles,
/// so the owner invalidates wholesale whenever a toggle lands.
pub struct QueryCache {
    inner: moka::sync::Cache<String, Arc<Vec<AnnotatedOpportunity>>>,
}

impl QueryCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let inner = moka::sync::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();
        Self { inner }
    }

    /// Get a cached result for a query, if present.
    pub fn get(&self, query: &OpportunityQuery) -> Option<Arc<Vec<AnnotatedOpportunity>>> {
        let key = CacheKey::query(query);
        let hit = self.inner.get(&key);
        if hit.is_some() {
            tracing::trace!("Query cache hit: {}", key);
        } else {
            tracing::trace!("Query cache miss: {}", key);
        }
        hit
    }

    /// Store a result for a query.
    pub fn insert(&self, query: &OpportunityQuery, results: Vec<AnnotatedOpportunity>) {
        let key = CacheKey::query(query);
        self.inner.insert(key, Arc::new(results));
    }

    /// Drop every cached result. Called when an interest toggle changes
    /// effective counts, since any cached ordering may be stale.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
        tracing::debug!("Query cache invalidated");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entry_count: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key from the full query. Two queries share a key only
    /// when every filter and the sort key agree.
    pub fn query(query: &OpportunityQuery) -> String {
        format!(
            "query:{}:{:?}:{:?}:{:?}:{:?}",
            query.search_text.to_lowercase(),
            query.branch,
            query.year,
            query.status,
            query.sort,
        )
    }
}
