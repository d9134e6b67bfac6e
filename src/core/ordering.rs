use chrono::NaiveDate;

use crate::models::{AnnotatedOpportunity, SortKey};

/// Sort results in place according to the requested key.
///
/// Every arm uses a stable sort: `newest` and `relevance` are two-group
/// partitions with no secondary key, so ties must keep catalog order.
pub fn sort_results(results: &mut [AnnotatedOpportunity], sort: SortKey) {
    match sort {
        SortKey::Deadline => {
            results.sort_by_key(|a| deadline_sort_key(a.opportunity.deadline_date()));
        }
        SortKey::Popularity => {
            results.sort_by(|a, b| {
                b.opportunity
                    .interest_count
                    .cmp(&a.opportunity.interest_count)
            });
        }
        SortKey::Newest => {
            results.sort_by_key(|a| !a.opportunity.is_new);
        }
        SortKey::Relevance => {
            results.sort_by_key(|a| !a.is_recommended);
        }
    }
}

/// Unparsable deadlines order after every valid date.
#[inline]
fn deadline_sort_key(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or(NaiveDate::MAX)
}
