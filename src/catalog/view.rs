use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::item::Item;

/// Sort modes offered by the list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Descending by ID: newest registrations first.
    #[default]
    Insertion,
    /// Ascending by current stock count: scarcest first.
    Stock,
    /// Ascending by display name.
    Name,
    /// Ascending by the primary categorical tag.
    Category,
    /// Ascending by grade tag. In variants that track origin order this
    /// mode instead reproduces the sheet's own row order: the label and the
    /// ordering key were deliberately decoupled in the newest variant, and
    /// that behavior is kept as-is.
    Grade,
}

/// Derive the displayed sequence from the collection.
///
/// Pure function: filters by a case-insensitive substring match on the
/// display name and categorical tags, then orders by `sort`. The sort is
/// stable, so ties keep fetch order.
pub fn view(items: &[Item], query: &str, sort: SortMode, track_origin_order: bool) -> Vec<Item> {
    let needle = query.trim().to_lowercase();

    let mut out: Vec<Item> = items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .cloned()
        .collect();

    match sort {
        SortMode::Insertion => out.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::Stock => out.sort_by_key(|item| item.stock),
        SortMode::Name => out.sort_by(|a, b| collate(&a.name, &b.name)),
        SortMode::Category => out.sort_by(|a, b| collate(a.category_key(), b.category_key())),
        SortMode::Grade => {
            if track_origin_order {
                out.sort_by_key(|item| item.origin_rank);
            } else {
                out.sort_by(|a, b| collate(a.grade_key(), b.grade_key()));
            }
        }
    }

    out
}

fn matches_query(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if item.name.to_lowercase().contains(needle) {
        return true;
    }
    item.tags().any(|tag| tag.to_lowercase().contains(needle))
}

/// Case-insensitive code-point comparison with a raw tie-break.
///
/// Stand-in for the browser's locale-aware comparison; for the Japanese
/// titles and ASCII ISBN-era names the sheet holds, code-point order is the
/// same order users saw.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(|c| c.to_lowercase())
        .cmp(b.chars().flat_map(|c| c.to_lowercase()));
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
