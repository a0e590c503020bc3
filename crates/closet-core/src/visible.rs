//! Visible-List Derivation
//!
//! Pure function of (collection, filter state): the filtered and sorted
//! subsequence the grid renders. No pagination.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::collation::{compare_names, fold_for_search};
use crate::domain::{FilterState, Item, SortMode};

/// Parse an ISO-8601 timestamp or plain date into an instant
fn parse_created(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset())
}

/// Creation order. Parseable timestamps compare as instants and sort before
/// unparseable ones; two unparseable values compare as strings.
pub fn compare_created(a: &str, b: &str) -> Ordering {
    match (parse_created(a), parse_created(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn member_of(selected: &BTreeSet<String>, value: &str) -> bool {
    if selected.is_empty() {
        return true;
    }
    let value = fold_for_search(value.trim());
    selected.iter().any(|s| fold_for_search(s.trim()) == value)
}

/// Whether one item passes every axis of the filter
pub fn matches(item: &Item, filter: &FilterState) -> bool {
    let query = filter.query.trim();
    if !query.is_empty() && !fold_for_search(&item.name).contains(&fold_for_search(query)) {
        return false;
    }
    member_of(&filter.categories, &item.category)
        && member_of(&filter.colors, &item.color)
        && member_of(&filter.sizes, &item.size)
}

fn compare(a: &Item, b: &Item, sort: SortMode) -> Ordering {
    match sort {
        SortMode::Newest => compare_created(&b.created_at, &a.created_at),
        SortMode::Oldest => compare_created(&a.created_at, &b.created_at),
        SortMode::NameAsc => compare_names(&a.name, &b.name),
        SortMode::NameDesc => compare_names(&b.name, &a.name),
    }
}

/// Filter then sort. Relative order of equal keys is not part of the contract.
pub fn visible_items<'a>(items: &'a [Item], filter: &FilterState) -> Vec<&'a Item> {
    let mut visible: Vec<&Item> = items.iter().filter(|item| matches(item, filter)).collect();
    visible.sort_by(|a, b| compare(a, b, filter.sort));
    log::debug!(
        "derived {} of {} items (sort={})",
        visible.len(),
        items.len(),
        filter.sort.as_str()
    );
    visible
}
