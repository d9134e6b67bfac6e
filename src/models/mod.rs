// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnnotatedOpportunity, Branch, Opportunity, OpportunityQuery, SortKey, Status, Year};
pub use requests::{QueryOpportunitiesRequest, RecordInterestRequest};
pub use responses::{
    ErrorResponse, HealthResponse, QueryOpportunitiesResponse, RecordInterestResponse,
    TrendingResponse,
};
