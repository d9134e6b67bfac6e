use std::collections::{HashMap, HashSet};
use std::path::Path;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Branch, Opportunity, Status, Year};

/// Errors that can occur with catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown opportunity: {0}")]
    UnknownOpportunity(String),
}

/// In-memory opportunity catalog
///
/// The catalog itself is static for the lifetime of the process; the only
/// mutable state is the per-student interest toggles, tracked separately so
/// the base records are never written to.
pub struct CatalogStore {
    opportunities: Vec<Opportunity>,
    // opportunity id -> student ids who toggled interest on
    interest: RwLock<HashMap<String, HashSet<String>>>,
}

impl CatalogStore {
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        Self {
            opportunities,
            interest: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store seeded with the built-in sample catalog.
    pub fn with_samples() -> Self {
        Self::new(sample_catalog())
    }

    /// Load a catalog from a JSON file (an array of opportunities).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let opportunities: Vec<Opportunity> = serde_json::from_str(&json)?;
        Ok(Self::new(opportunities))
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }

    /// Snapshot the catalog with effective interest counts (base count plus
    /// toggles). This is what query evaluation consumes, so popularity
    /// ordering reflects recorded interest.
    pub async fn snapshot(&self) -> Vec<Opportunity> {
        let interest = self.interest.read().await;
        self.opportunities
            .iter()
            .map(|o| {
                let extra = interest.get(&o.id).map_or(0, |s| s.len() as u32);
                let mut snapshot = o.clone();
                snapshot.interest_count += extra;
                snapshot
            })
            .collect()
    }

    /// Toggle a student's interest in an opportunity.
    ///
    /// Returns the student's interest state after the toggle and the
    /// effective interest count.
    pub async fn record_interest(
        &self,
        student_id: &str,
        opportunity_id: &str,
    ) -> Result<(bool, u32), CatalogError> {
        let base = self
            .opportunities
            .iter()
            .find(|o| o.id == opportunity_id)
            .ok_or_else(|| CatalogError::UnknownOpportunity(opportunity_id.to_string()))?;

        let mut interest = self.interest.write().await;
        let students = interest.entry(opportunity_id.to_string()).or_default();

        let interested = if students.remove(student_id) {
            false
        } else {
            students.insert(student_id.to_string());
            true
        };

        let count = base.interest_count + students.len() as u32;
        Ok((interested, count))
    }

    /// Opportunity ids a student has toggled interest on.
    pub async fn interested_ids(&self, student_id: &str) -> Vec<String> {
        let interest = self.interest.read().await;
        let mut ids: Vec<String> = interest
            .iter()
            .filter(|(_, students)| students.contains(student_id))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }
}

/// The built-in sample catalog: six opportunities from the OppGrid landing
/// page mock data.
pub fn sample_catalog() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: "1".to_string(),
            title: "Software Engineering Intern".to_string(),
            company: "Google".to_string(),
            logo_url: "https://upload.wikimedia.org/wikipedia/commons/2/2f/Google_2015_logo.svg"
                .to_string(),
            deadline: "2026-03-15".to_string(),
            branch_eligibility: vec![Branch::Cs, Branch::It],
            year_eligibility: vec![Year::Third, Year::Fourth],
            interest_count: 156,
            is_trending: true,
            is_new: false,
            status: Status::Open,
        },
        Opportunity {
            id: "2".to_string(),
            title: "Product Design Intern".to_string(),
            company: "Airbnb".to_string(),
            logo_url:
                "https://upload.wikimedia.org/wikipedia/commons/6/69/Airbnb_Logo_B%C3%A9lo.svg"
                    .to_string(),
            deadline: "2026-03-01".to_string(),
            branch_eligibility: vec![Branch::All],
            year_eligibility: vec![Year::Second, Year::Third, Year::Fourth],
            interest_count: 89,
            is_trending: true,
            is_new: true,
            status: Status::ClosingSoon,
        },
        Opportunity {
            id: "3".to_string(),
            title: "Data Science Intern".to_string(),
            company: "Meta".to_string(),
            logo_url:
                "https://upload.wikimedia.org/wikipedia/commons/7/7b/Meta_Platforms_Inc._logo.svg"
                    .to_string(),
            deadline: "2026-04-10".to_string(),
            branch_eligibility: vec![Branch::Cs, Branch::It, Branch::Ece],
            year_eligibility: vec![Year::Fourth],
            interest_count: 245,
            is_trending: true,
            is_new: false,
            status: Status::Open,
        },
        Opportunity {
            id: "4".to_string(),
            title: "Marketing Associate".to_string(),
            company: "Spotify".to_string(),
            logo_url:
                "https://upload.wikimedia.org/wikipedia/commons/1/19/Spotify_logo_with_text.svg"
                    .to_string(),
            deadline: "2026-02-28".to_string(),
            branch_eligibility: vec![Branch::All],
            year_eligibility: vec![Year::All],
            interest_count: 42,
            is_trending: false,
            is_new: false,
            status: Status::ClosingSoon,
        },
        Opportunity {
            id: "5".to_string(),
            title: "Hardware Engineer".to_string(),
            company: "Apple".to_string(),
            logo_url: "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg"
                .to_string(),
            deadline: "2026-05-20".to_string(),
            branch_eligibility: vec![Branch::Ece, Branch::Ee],
            year_eligibility: vec![Year::Fourth],
            interest_count: 112,
            is_trending: false,
            is_new: true,
            status: Status::Open,
        },
        Opportunity {
            id: "6".to_string(),
            title: "Business Analyst".to_string(),
            company: "Goldman Sachs".to_string(),
            logo_url: "https://upload.wikimedia.org/wikipedia/commons/6/61/Goldman_Sachs.svg"
                .to_string(),
            deadline: "2026-02-20".to_string(),
            branch_eligibility: vec![Branch::All],
            year_eligibility: vec![Year::Third, Year::Fourth],
            interest_count: 300,
            is_trending: false,
            is_new: false,
            status: Status::Closed,
        },
    ]
}
