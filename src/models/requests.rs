use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Branch, OpportunityQuery, SortKey, Status, Year};

/// Request to query the opportunity catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOpportunitiesRequest {
    #[serde(default)]
    #[serde(alias = "search_text", rename = "searchText")]
    pub search_text: String,
    #[serde(default = "default_branch")]
    pub branch: Branch,
    #[serde(default = "default_year")]
    pub year: Year,
    #[serde(default)]
    pub status: Option<Status>,
    /// Raw sort key; unknown values fall back to relevance.
    #[serde(default)]
    pub sort: Option<String>,
}

fn default_branch() -> Branch {
    Branch::All
}

fn default_year() -> Year {
    Year::All
}

impl QueryOpportunitiesRequest {
    /// Convert to an engine query, applying the configured default sort when
    /// the client omitted one.
    pub fn into_query(self, default_sort: SortKey) -> OpportunityQuery {
        let sort = match self.sort.as_deref() {
            Some(raw) => SortKey::parse(raw),
            None => default_sort,
        };
        OpportunityQuery {
            search_text: self.search_text,
            branch: self.branch,
            year: self.year,
            status: self.status,
            sort,
        }
    }
}

/// Request to toggle a student's interest in an opportunity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordInterestRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "student_id", rename = "studentId")]
    pub student_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "opportunity_id", rename = "opportunityId")]
    pub opportunity_id: String,
}
