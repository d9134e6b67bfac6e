use crate::models::{Branch, Opportunity, OpportunityQuery, Status, Year};

/// Compute the per-query recommendation annotation.
///
/// Uses strict membership: an opportunity open to `All` branches is not
/// thereby recommended unless the selected branch/year itself appears in the
/// eligibility set. Selecting the `All` wildcard recommends nothing for that
/// dimension.
#[inline]
pub fn is_recommended(opportunity: &Opportunity, query: &OpportunityQuery) -> bool {
    let branch_match = query.branch != Branch::All
        && opportunity.branch_eligibility.contains(&query.branch);
    let year_match =
        query.year != Year::All && opportunity.year_eligibility.contains(&query.year);

    branch_match || year_match
}

/// Case-insensitive substring match against title and company.
///
/// An empty search text matches everything.
#[inline]
pub fn matches_search(opportunity: &Opportunity, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }

    let needle = search_text.to_lowercase();
    opportunity.title.to_lowercase().contains(&needle)
        || opportunity.company.to_lowercase().contains(&needle)
}

/// Branch eligibility filter. The `All` wildcard passes on either side.
#[inline]
pub fn matches_branch(opportunity: &Opportunity, branch: Branch) -> bool {
    if branch == Branch::All {
        return true;
    }

    opportunity.branch_eligibility.contains(&branch)
        || opportunity.branch_eligibility.contains(&Branch::All)
}

/// Year eligibility filter, same wildcard semantics as the branch filter.
#[inline]
pub fn matches_year(opportunity: &Opportunity, year: Year) -> bool {
    if year == Year::All {
        return true;
    }

    opportunity.year_eligibility.contains(&year)
        || opportunity.year_eligibility.contains(&Year::All)
}

/// Status filter: exact equality, `None` passes everything.
#[inline]
pub fn matches_status(opportunity: &Opportunity, status: Option<Status>) -> bool {
    match status {
        Some(wanted) => opportunity.status == wanted,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn create_test_opportunity(branches: Vec<Branch>, years: Vec<Year>) -> Opportunity {
        Opportunity {
            id: "test_opp".to_string(),
            title: "Software Engineering Intern".to_string(),
            company: "Acme".to_string(),
            logo_url: String::new(),
            deadline: "2026-03-15".to_string(),
            branch_eligibility: branches,
            year_eligibility: years,
            interest_count: 10,
            is_trending: false,
            is_new: false,
            status: Status::Open,
        }
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let opp = create_test_opportunity(vec![Branch::All], vec![Year::All]);
        assert!(matches_search(&opp, "INTERN"));
        assert!(matches_search(&opp, "software eng"));
        assert!(!matches_search(&opp, "designer"));
    }

    #[test]
    fn test_search_matches_company() {
        let opp = create_test_opportunity(vec![Branch::All], vec![Year::All]);
        assert!(matches_search(&opp, "acme"));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let opp = create_test_opportunity(vec![Branch::All], vec![Year::All]);
        assert!(matches_search(&opp, ""));
    }

    #[test]
    fn test_branch_filter_exact_membership() {
        let opp = create_test_opportunity(vec![Branch::Cs, Branch::It], vec![Year::All]);
        assert!(matches_branch(&opp, Branch::Cs));
        assert!(!matches_branch(&opp, Branch::Me));
    }

    #[test]
    fn test_branch_filter_wildcard_eligibility() {
        let opp = create_test_opportunity(vec![Branch::All], vec![Year::All]);
        assert!(matches_branch(&opp, Branch::Me));
    }

    #[test]
    fn test_branch_filter_all_disables() {
        let opp = create_test_opportunity(vec![Branch::Ece], vec![Year::All]);
        assert!(matches_branch(&opp, Branch::All));
    }

    #[test]
    fn test_year_filter_wildcard() {
        let opp = create_test_opportunity(vec![Branch::All], vec![Year::Third, Year::Fourth]);
        assert!(matches_year(&opp, Year::Third));
        assert!(!matches_year(&opp, Year::First));
        assert!(matches_year(&opp, Year::All));
    }

    #[test]
    fn test_status_filter() {
        let opp = create_test_opportunity(vec![Branch::All], vec![Year::All]);
        assert!(matches_status(&opp, None));
        assert!(matches_status(&opp, Some(Status::Open)));
        assert!(!matches_status(&opp, Some(Status::Closed)));
    }

    #[test]
    fn test_recommended_requires_strict_membership() {
        // Open to All branches, but the CS filter does not literally appear
        // in the eligibility set, so it is not recommended.
        let opp = create_test_opportunity(vec![Branch::All], vec![Year::All]);
        let query = OpportunityQuery {
            branch: Branch::Cs,
            ..Default::default()
        };
        assert!(!is_recommended(&opp, &query));
    }

    #[test]
    fn test_recommended_by_branch() {
        let opp = create_test_opportunity(vec![Branch::Cs, Branch::It], vec![Year::Fourth]);
        let query = OpportunityQuery {
            branch: Branch::Cs,
            ..Default::default()
        };
        assert!(is_recommended(&opp, &query));
    }

    #[test]
    fn test_recommended_by_year_alone() {
        let opp = create_test_opportunity(vec![Branch::Ece], vec![Year::Third]);
        let query = OpportunityQuery {
            branch: Branch::Cs,
            year: Year::Third,
            ..Default::default()
        };
        assert!(is_recommended(&opp, &query));
    }

    #[test]
    fn test_all_wildcard_query_recommends_nothing() {
        let opp = create_test_opportunity(vec![Branch::Cs], vec![Year::Third]);
        let query = OpportunityQuery::default();
        assert!(!is_recommended(&opp, &query));
    }
}
