use std::collections::HashMap;

use super::model::PostTable;

/// How many influencers the ranking keeps.
pub const TOP_INFLUENCER_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// ViewSummary – KPIs and chart aggregates over the filtered subset
// ---------------------------------------------------------------------------

/// All numbers the dashboard displays, computed in one pass over the
/// filtered index list. Recomputed from scratch on every filter change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSummary {
    pub total_posts: usize,
    pub total_engagements: u64,
    /// Mean engagements per post; 0.0 (never NaN) when no posts match.
    pub avg_engagement: f64,
    /// Summed engagements per platform, descending by sum.
    pub engagement_by_platform: Vec<(String, u64)>,
    /// Post counts per sentiment label, descending by count.
    pub sentiment_counts: Vec<(String, u64)>,
    /// Summed engagements per influencer, descending, at most
    /// [`TOP_INFLUENCER_LIMIT`] entries. Ties keep first-appearance order.
    pub top_influencers: Vec<(String, u64)>,
}

/// Compute the dashboard aggregates for the posts at `indices`.
pub fn summarize(table: &PostTable, indices: &[usize]) -> ViewSummary {
    let total_posts = indices.len();
    let total_engagements: u64 = indices.iter().map(|&i| table.posts[i].engagements).sum();
    let avg_engagement = if total_posts == 0 {
        0.0
    } else {
        total_engagements as f64 / total_posts as f64
    };

    let mut by_platform = GroupSums::default();
    let mut by_sentiment = GroupSums::default();
    let mut by_influencer = GroupSums::default();

    for &i in indices {
        let post = &table.posts[i];
        by_platform.add(&post.platform, post.engagements);
        by_sentiment.add(&post.sentiment, 1);
        if let Some(handle) = &post.influencer {
            by_influencer.add(handle, post.engagements);
        }
    }

    let mut top_influencers = by_influencer.into_sorted_desc();
    top_influencers.truncate(TOP_INFLUENCER_LIMIT);

    ViewSummary {
        total_posts,
        total_engagements,
        avg_engagement,
        engagement_by_platform: by_platform.into_sorted_desc(),
        sentiment_counts: by_sentiment.into_sorted_desc(),
        top_influencers,
    }
}

// ---------------------------------------------------------------------------
// GroupSums – per-key accumulator preserving first-appearance order
// ---------------------------------------------------------------------------

#[derive(Default)]
struct GroupSums {
    order: Vec<String>,
    sums: HashMap<String, u64>,
}

impl GroupSums {
    fn add(&mut self, key: &str, amount: u64) {
        match self.sums.get_mut(key) {
            Some(sum) => *sum += amount,
            None => {
                self.order.push(key.to_string());
                self.sums.insert(key.to_string(), amount);
            }
        }
    }

    /// Rows descending by sum. The sort is stable, so equal sums keep the
    /// order in which their keys first appeared.
    fn into_sorted_desc(mut self) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .order
            .drain(..)
            .map(|key| {
                let sum = self.sums[&key];
                (key, sum)
            })
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, init_filter_state};
    use crate::data::model::{extract_influencer, Post};
    use chrono::NaiveDate;

    fn table() -> PostTable {
        let rows = [
            ("2024-03-01", "TikTok", "@eco.mama review", 100u64, "Positive"),
            ("2024-03-02", "Instagram", "@fizz_fan story", 200, "Neutral"),
            ("2024-03-03", "TikTok", "@fizz_fan duet", 50, "Positive"),
            ("2024-03-04", "X", "@sip.daily thread", 200, "Negative"),
            ("2024-03-05", "Instagram", "@eco.mama reel", 300, "Positive"),
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
    fn kpis_match_manual_sums_with_default_filters() {
        let table = table();
        let indices = filtered_indices(&table, &init_filter_state(&table));
        let summary = summarize(&table, &indices);

        assert_eq!(summary.total_posts, 5);
        assert_eq!(summary.total_engagements, 850);
        assert!((summary.avg_engagement - 170.0).abs() < 1e-9);
    }

    #[test]
    fn group_sums_reconcile_with_totals() {
        let table = table();
        let indices = filtered_indices(&table, &init_filter_state(&table));
        let summary = summarize(&table, &indices);

        let platform_total: u64 = summary.engagement_by_platform.iter().map(|(_, v)| v).sum();
        assert_eq!(platform_total, summary.total_engagements);

        let sentiment_total: u64 = summary.sentiment_counts.iter().map(|(_, v)| v).sum();
        assert_eq!(sentiment_total, summary.total_posts as u64);
    }

    #[test]
    fn platform_filter_narrows_the_counts() {
        let table = table();
        let mut filters = init_filter_state(&table);
        filters.platforms = ["TikTok".to_string()].into();
        let indices = filtered_indices(&table, &filters);
        let summary = summarize(&table, &indices);

        assert_eq!(summary.total_posts, 2);
        assert_eq!(summary.total_engagements, 150);
        assert_eq!(
            summary.engagement_by_platform,
            vec![("TikTok".to_string(), 150)]
        );
    }

    #[test]
    fn empty_subset_yields_zeroes_not_nan() {
        let table = table();
        let summary = summarize(&table, &[]);

        assert_eq!(summary.total_posts, 0);
        assert_eq!(summary.total_engagements, 0);
        assert_eq!(summary.avg_engagement, 0.0);
        assert!(summary.engagement_by_platform.is_empty());
        assert!(summary.sentiment_counts.is_empty());
        assert!(summary.top_influencers.is_empty());
    }

    #[test]
    fn influencer_ranking_is_descending_with_stable_ties() {
        let table = table();
        let indices: Vec<usize> = (0..table.len()).collect();
        let summary = summarize(&table, &indices);

        // @eco.mama sums to 400, @fizz_fan to 250, @sip.daily to 200.
        assert_eq!(
            summary.top_influencers,
            vec![
                ("@eco.mama".to_string(), 400),
                ("@fizz_fan".to_string(), 250),
                ("@sip.daily".to_string(), 200),
            ]
        );
    }

    #[test]
    fn ranking_truncates_to_ten_and_keeps_tie_order() {
        let posts: Vec<Post> = (0..12)
            .map(|i| {
                let brand = format!("@handle{i:02}");
                Post {
                    date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    platform: "TikTok".to_string(),
                    influencer: extract_influencer(&brand),
                    influencer_brand: brand,
                    engagements: 10, // all tied
                    sentiment: "Neutral".to_string(),
                }
            })
            .collect();
        let table = PostTable::from_posts(posts);
        let indices: Vec<usize> = (0..table.len()).collect();
        let summary = summarize(&table, &indices);

        assert_eq!(summary.top_influencers.len(), TOP_INFLUENCER_LIMIT);
        // First appearance wins among ties.
        assert_eq!(summary.top_influencers[0].0, "@handle00");
        assert_eq!(summary.top_influencers[9].0, "@handle09");
    }
}
