use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Academic branch tag. `All` is the eligibility wildcard: an opportunity
/// listing `All` accepts every branch, and a query selecting `All` disables
/// the branch filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "CS")]
    Cs,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "ECE")]
    Ece,
    #[serde(rename = "ME")]
    Me,
    #[serde(rename = "CE")]
    Ce,
    #[serde(rename = "EE")]
    Ee,
    All,
}

/// Year-of-study tag, with the same `All` wildcard semantics as [`Branch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Year {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    All,
}

/// Application window status, editorially set on each opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Open,
    #[serde(rename = "Closing Soon")]
    ClosingSoon,
    Closed,
}

/// Sort key for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Relevance,
    Newest,
    Deadline,
    Popularity,
}

impl SortKey {
    /// Parse a raw sort key string from the client.
    ///
    /// Unrecognized values fall back to `relevance` rather than failing the
    /// request.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "newest" => SortKey::Newest,
            "deadline" => SortKey::Deadline,
            "popularity" => SortKey::Popularity,
            _ => SortKey::Relevance,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Relevance
    }
}

/// An internship/placement opportunity from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(rename = "logoUrl", alias = "logo")]
    pub logo_url: String,
    /// ISO date string (YYYY-MM-DD). Kept as a string so a malformed value
    /// degrades ordering accuracy instead of rejecting the record.
    pub deadline: String,
    #[serde(rename = "branchEligibility")]
    pub branch_eligibility: Vec<Branch>,
    #[serde(rename = "yearEligibility")]
    pub year_eligibility: Vec<Year>,
    #[serde(rename = "interestCount")]
    pub interest_count: u32,
    #[serde(rename = "isTrending", default)]
    pub is_trending: bool,
    #[serde(rename = "isNew", default)]
    pub is_new: bool,
    pub status: Status,
}

impl Opportunity {
    /// Parse the deadline, if it is a valid ISO date.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.deadline, "%Y-%m-%d").ok()
    }
}

/// User-selected filter and sort criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityQuery {
    /// Free text matched case-insensitively against title and company.
    /// Empty disables the text filter.
    #[serde(rename = "searchText")]
    pub search_text: String,
    pub branch: Branch,
    pub year: Year,
    /// `None` means any status.
    pub status: Option<Status>,
    pub sort: SortKey,
}

impl Default for OpportunityQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            branch: Branch::All,
            year: Year::All,
            status: None,
            sort: SortKey::Relevance,
        }
    }
}

/// An opportunity annotated with per-query derived data.
///
/// `is_recommended` is recomputed on every evaluation and never written back
/// to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedOpportunity {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    #[serde(rename = "isRecommended")]
    pub is_recommended: bool,
}
