use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::PostTable;

// ---------------------------------------------------------------------------
// Filter predicate: sidebar selections over the loaded table
// ---------------------------------------------------------------------------

/// The three sidebar filter selections. An empty set means "nothing
/// selected" and matches no rows; there is no implicit select-all fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub platforms: BTreeSet<String>,
    pub influencers: BTreeSet<String>,
    /// Inclusive start of the date range.
    pub start: NaiveDate,
    /// Inclusive end of the date range.
    pub end: NaiveDate,
}

/// Initialise a [`FilterState`] with everything selected and the date range
/// spanning the whole table.
pub fn init_filter_state(table: &PostTable) -> FilterState {
    FilterState {
        platforms: table.platforms.clone(),
        influencers: table.influencers.clone(),
        start: table.min_date,
        end: table.max_date,
    }
}

/// Return indices of posts that pass all three filters.
///
/// A post passes when its platform is selected, its extracted influencer is
/// selected, and its date falls in `[start, end]` (both ends inclusive).
/// Posts without an extracted handle never pass the influencer filter,
/// matching set-membership over a nullable column. `start > end` matches
/// nothing.
pub fn filtered_indices(table: &PostTable, filters: &FilterState) -> Vec<usize> {
    table
        .posts
        .iter()
        .enumerate()
        .filter(|(_, post)| {
            filters.platforms.contains(&post.platform)
                && post
                    .influencer
                    .as_ref()
                    .is_some_and(|handle| filters.influencers.contains(handle))
                && post.date >= filters.start
                && post.date <= filters.end
        })
        .map(|(i, _)| i)
        .collect()
}
