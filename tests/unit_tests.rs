// Unit tests for OppGrid Algo

use oppgrid_algo::core::{
    filters::{is_recommended, matches_branch, matches_search, matches_status, matches_year},
    ordering::sort_results,
};
use oppgrid_algo::models::{
    AnnotatedOpportunity, Branch, Opportunity, OpportunityQuery, SortKey, Status, Year,
};

fn create_opportunity(
    id: &str,
    title: &str,
    company: &str,
    deadline: &str,
    branches: Vec<Branch>,
    years: Vec<Year>,
    status: Status,
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        logo_url: String::new(),
        deadline: deadline.to_string(),
        branch_eligibility: branches,
        year_eligibility: years,
        interest_count: 0,
        is_trending: false,
        is_new: false,
        status,
    }
}

#[test]
fn test_search_is_case_insensitive_both_ways() {
    let opp = create_opportunity(
        "1",
        "Software Engineering Intern",
        "Google",
        "2026-03-15",
        vec![Branch::Cs],
        vec![Year::Fourth],
        Status::Open,
    );

    assert!(matches_search(&opp, "INTERN"));
    assert!(matches_search(&opp, "google"));
    assert!(matches_search(&opp, "GoOgLe"));
    assert!(!matches_search(&opp, "analyst"));
}

#[test]
fn test_branch_filter_passes_on_wildcard_eligibility() {
    let opp = create_opportunity(
        "1",
        "Business Analyst",
        "Goldman Sachs",
        "2026-02-20",
        vec![Branch::All],
        vec![Year::Third, Year::Fourth],
        Status::Closed,
    );

    // Every concrete branch passes through the All eligibility
    assert!(matches_branch(&opp, Branch::Cs));
    assert!(matches_branch(&opp, Branch::Me));
    assert!(matches_branch(&opp, Branch::Ee));
}

#[test]
fn test_year_filter_strict_without_wildcard() {
    let opp = create_opportunity(
        "1",
        "Data Science Intern",
        "Meta",
        "2026-04-10",
        vec![Branch::Cs],
        vec![Year::Fourth],
        Status::Open,
    );

    assert!(matches_year(&opp, Year::Fourth));
    assert!(!matches_year(&opp, Year::First));
}

#[test]
fn test_status_filter_exact_equality() {
    let opp = create_opportunity(
        "1",
        "Product Design Intern",
        "Airbnb",
        "2026-03-01",
        vec![Branch::All],
        vec![Year::All],
        Status::ClosingSoon,
    );

    assert!(matches_status(&opp, Some(Status::ClosingSoon)));
    assert!(!matches_status(&opp, Some(Status::Open)));
    assert!(matches_status(&opp, None));
}

#[test]
fn test_recommendation_ignores_wildcard_eligibility() {
    let wildcard_opp = create_opportunity(
        "1",
        "Marketing Associate",
        "Spotify",
        "2026-02-28",
        vec![Branch::All],
        vec![Year::All],
        Status::ClosingSoon,
    );
    let cs_opp = create_opportunity(
        "2",
        "Software Engineering Intern",
        "Google",
        "2026-03-15",
        vec![Branch::Cs, Branch::It],
        vec![Year::Third, Year::Fourth],
        Status::Open,
    );

    let query = OpportunityQuery {
        branch: Branch::Cs,
        ..Default::default()
    };

    assert!(!is_recommended(&wildcard_opp, &query));
    assert!(is_recommended(&cs_opp, &query));
}

#[test]
fn test_recommendation_never_fires_on_default_query() {
    let opp = create_opportunity(
        "1",
        "Software Engineering Intern",
        "Google",
        "2026-03-15",
        vec![Branch::Cs],
        vec![Year::Third],
        Status::Open,
    );

    assert!(!is_recommended(&opp, &OpportunityQuery::default()));
}

fn annotate(opp: Opportunity) -> AnnotatedOpportunity {
    AnnotatedOpportunity {
        opportunity: opp,
        is_recommended: false,
    }
}

#[test]
fn test_deadline_sort_is_non_decreasing() {
    let mut results: Vec<AnnotatedOpportunity> = vec![
        ("a", "2026-05-20"),
        ("b", "2026-02-20"),
        ("c", "2026-04-10"),
        ("d", "2026-02-28"),
    ]
    .into_iter()
    .map(|(id, deadline)| {
        annotate(create_opportunity(
            id,
            "Intern",
            "Acme",
            deadline,
            vec![Branch::All],
            vec![Year::All],
            Status::Open,
        ))
    })
    .collect();

    sort_results(&mut results, SortKey::Deadline);

    let dates: Vec<_> = results
        .iter()
        .map(|a| a.opportunity.deadline_date().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_unparsable_deadline_sorts_as_latest() {
    let mut results: Vec<AnnotatedOpportunity> = vec![
        ("garbled", "02/28/2026"),
        ("valid", "2026-05-20"),
        ("empty", ""),
    ]
    .into_iter()
    .map(|(id, deadline)| {
        annotate(create_opportunity(
            id,
            "Intern",
            "Acme",
            deadline,
            vec![Branch::All],
            vec![Year::All],
            Status::Open,
        ))
    })
    .collect();

    sort_results(&mut results, SortKey::Deadline);

    assert_eq!(results[0].opportunity.id, "valid");
    // Both malformed entries order after every valid date, keeping their
    // relative order.
    assert_eq!(results[1].opportunity.id, "garbled");
    assert_eq!(results[2].opportunity.id, "empty");
}

#[test]
fn test_popularity_sort_is_non_increasing() {
    let mut results: Vec<AnnotatedOpportunity> = [156u32, 89, 245, 42, 112, 300]
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let mut opp = create_opportunity(
                &i.to_string(),
                "Intern",
                "Acme",
                "2026-03-01",
                vec![Branch::All],
                vec![Year::All],
                Status::Open,
            );
            opp.interest_count = count;
            annotate(opp)
        })
        .collect();

    sort_results(&mut results, SortKey::Popularity);

    let counts: Vec<u32> = results.iter().map(|a| a.opportunity.interest_count).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_newest_sort_has_no_secondary_key() {
    let mut results: Vec<AnnotatedOpportunity> = [
        ("old_1", false),
        ("new_1", true),
        ("old_2", false),
        ("new_2", true),
    ]
    .iter()
    .map(|(id, is_new)| {
        let mut opp = create_opportunity(
            id,
            "Intern",
            "Acme",
            "2026-03-01",
            vec![Branch::All],
            vec![Year::All],
            Status::Open,
        );
        opp.is_new = *is_new;
        annotate(opp)
    })
    .collect();

    sort_results(&mut results, SortKey::Newest);

    let ids: Vec<&str> = results.iter().map(|a| a.opportunity.id.as_str()).collect();
    assert_eq!(ids, vec!["new_1", "new_2", "old_1", "old_2"]);
}
