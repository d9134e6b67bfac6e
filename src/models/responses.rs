use serde::{Deserialize, Serialize};

use crate::models::domain::{AnnotatedOpportunity, Opportunity};

/// Response for the query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOpportunitiesResponse {
    pub opportunities: Vec<AnnotatedOpportunity>,
    pub total_results: usize,
    pub total_catalog: usize,
}

/// Response for the trending endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub opportunities: Vec<Opportunity>,
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Record interest response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInterestResponse {
    pub success: bool,
    /// Whether the student is interested after the toggle.
    pub interested: bool,
    /// Effective interest count after the toggle.
    #[serde(rename = "interestCount")]
    pub interest_count: u32,
    pub event_id: String,
}
