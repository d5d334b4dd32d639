use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::model::PostTable;
use crate::data::summary::{summarize, ViewSummary};

/// Message shown by the insight button until real key handling lands.
pub const INSIGHT_PLACEHOLDER: &str =
    "AI analysis will activate once an API key is configured. Coming soon!";

/// Which sidebar checkbox list a bulk action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Platform,
    Influencer,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None when the startup load failed).
    pub table: Option<PostTable>,

    /// Sidebar filter selections.
    pub filters: FilterState,

    /// Indices of posts passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates over `visible_indices` (cached).
    pub summary: ViewSummary,

    /// API key as typed in the sidebar. Collected but never validated or
    /// sent anywhere.
    pub api_key: String,

    /// Output of the insight button, once pressed.
    pub insight: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            summary: ViewSummary::default(),
            api_key: String::new(),
            insight: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest the loaded table and initialise filters to select everything.
    pub fn set_table(&mut self, table: PostTable) {
        self.filters = init_filter_state(&table);
        self.table = Some(table);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the visible index list and all aggregates. Full recompute,
    /// no incremental state.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.visible_indices = filtered_indices(table, &self.filters);
            self.summary = summarize(table, &self.visible_indices);
        }
    }

    /// Select every value in a checkbox column.
    pub fn select_all(&mut self, column: FilterColumn) {
        if let Some(table) = &self.table {
            match column {
                FilterColumn::Platform => self.filters.platforms = table.platforms.clone(),
                FilterColumn::Influencer => self.filters.influencers = table.influencers.clone(),
            }
            self.refilter();
        }
    }

    /// Deselect every value in a checkbox column.
    pub fn select_none(&mut self, column: FilterColumn) {
        match column {
            FilterColumn::Platform => self.filters.platforms.clear(),
            FilterColumn::Influencer => self.filters.influencers.clear(),
        }
        self.refilter();
    }

    /// The insight button: always the same static message, whatever the
    /// filters or API key say.
    pub fn generate_insight(&mut self) {
        self.insight = Some(INSIGHT_PLACEHOLDER.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{extract_influencer, Post, PostTable};
    use chrono::NaiveDate;

    fn table() -> PostTable {
        let rows = [
            ("2024-03-01", "TikTok", "@eco.mama review", 100u64, "Positive"),
            ("2024-03-02", "Instagram", "@fizz_fan story", 200, "Neutral"),
        ];
        PostTable::from_posts(
            rows.iter()
                .map(|&(d, platform, brand, engagements, sentiment)| Post {
                    date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
                    platform: platform.to_string(),
                    influencer: extract_influencer(brand),
                    influencer_brand: brand.to_string(),
                    engagements,
                    sentiment: sentiment.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn set_table_selects_everything() {
        let mut state = AppState::default();
        state.set_table(table());

        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.total_posts, 2);
        assert_eq!(state.summary.total_engagements, 300);
    }

    #[test]
    fn select_none_empties_the_view() {
        let mut state = AppState::default();
        state.set_table(table());
        state.select_none(FilterColumn::Platform);

        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary.total_posts, 0);
        assert_eq!(state.summary.avg_engagement, 0.0);

        state.select_all(FilterColumn::Platform);
        assert_eq!(state.visible_indices.len(), 2);
    }

    #[test]
    fn insight_is_a_fixed_message() {
        let mut state = AppState::default();
        state.api_key = "sk-anything".to_string();
        state.generate_insight();
        assert_eq!(state.insight.as_deref(), Some(INSIGHT_PLACEHOLDER));
    }
}
