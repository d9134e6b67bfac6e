//! OppGrid Algo - Opportunity query service for the OppGrid placement portal
//!
//! This library provides the filtering/sorting/recommendation pipeline behind
//! the OppGrid opportunity listings: a pure evaluation of (catalog, query)
//! into an ordered, annotated result list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{EvaluationResult, QueryEngine};
pub use models::{
    AnnotatedOpportunity, Branch, Opportunity, OpportunityQuery, QueryOpportunitiesRequest,
    QueryOpportunitiesResponse, SortKey, Status, Year,
};
pub use services::{sample_catalog, CatalogStore, QueryCache};
