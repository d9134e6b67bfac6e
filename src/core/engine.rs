use crate::core::{
    filters::{is_recommended, matches_branch, matches_search, matches_status, matches_year},
    ordering::sort_results,
};
use crate::models::{AnnotatedOpportunity, Opportunity, OpportunityQuery, SortKey};

/// Default size of the trending selection.
pub const DEFAULT_TRENDING_LIMIT: usize = 4;

/// Result of evaluating a query against the catalog
#[derive(Debug)]
pub struct EvaluationResult {
    pub opportunities: Vec<AnnotatedOpportunity>,
    pub total_catalog: usize,
}

/// Opportunity query engine - turns a catalog plus filter/sort criteria into
/// an ordered, annotated result list
///
/// # Pipeline Stages
/// 1. Recommendation annotation over the full catalog
/// 2. Text filter (title/company substring)
/// 3. Branch eligibility filter
/// 4. Year eligibility filter
/// 5. Status filter
/// 6. Stable sort by the requested key
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine {
    default_sort: SortKey,
}

impl QueryEngine {
    pub fn new(default_sort: SortKey) -> Self {
        Self { default_sort }
    }

    pub fn with_default_sort() -> Self {
        Self {
            default_sort: SortKey::default(),
        }
    }

    pub fn default_sort(&self) -> SortKey {
        self.default_sort
    }

    /// Evaluate a query against the catalog.
    ///
    /// Pure over its inputs: the catalog is never mutated, annotation is
    /// recomputed from scratch on every call, and there are no failure
    /// modes. An empty catalog or an unmatched filter set yields an empty
    /// result.
    ///
    /// Annotation runs over the full catalog before any filter so that the
    /// recommendation flag never depends on what the filters keep.
    pub fn evaluate(
        &self,
        catalog: &[Opportunity],
        query: &OpportunityQuery,
    ) -> EvaluationResult {
        let total_catalog = catalog.len();

        let mut opportunities: Vec<AnnotatedOpportunity> = catalog
            .iter()
            // Stage 1: annotate every catalog entry
            .map(|opportunity| AnnotatedOpportunity {
                is_recommended: is_recommended(opportunity, query),
                opportunity: opportunity.clone(),
            })
            // Stages 2-5: filters, in query order
            .filter(|a| matches_search(&a.opportunity, &query.search_text))
            .filter(|a| matches_branch(&a.opportunity, query.branch))
            .filter(|a| matches_year(&a.opportunity, query.year))
            .filter(|a| matches_status(&a.opportunity, query.status))
            .collect();

        // Stage 6: stable sort
        sort_results(&mut opportunities, query.sort);

        EvaluationResult {
            opportunities,
            total_catalog,
        }
    }

    /// Select the trending carousel entries: the first `limit` catalog
    /// entries flagged as trending, in catalog order.
    pub fn trending(&self, catalog: &[Opportunity], limit: usize) -> Vec<Opportunity> {
        catalog
            .iter()
            .filter(|o| o.is_trending)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::with_default_sort()
    }
}
