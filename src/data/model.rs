use std::collections::BTreeSet;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

// ---------------------------------------------------------------------------
// Post – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single social-media post (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub date: NaiveDate,
    pub platform: String,
    /// Free-text attribution field, usually containing an `@handle`.
    pub influencer_brand: String,
    /// First `@handle` token extracted from `influencer_brand`, if any.
    pub influencer: Option<String>,
    pub engagements: u64,
    pub sentiment: String,
}

// ---------------------------------------------------------------------------
// Handle extraction
// ---------------------------------------------------------------------------

/// Extract the first `@handle` token (`@` followed by word characters and
/// dots) from a free-text attribution string.
pub fn extract_influencer(text: &str) -> Option<String> {
    static HANDLE_RE: OnceLock<Regex> = OnceLock::new();
    let re = HANDLE_RE.get_or_init(|| Regex::new(r"@[\w.]+").expect("valid handle pattern"));
    re.find(text).map(|m| m.as_str().to_string())
}

// ---------------------------------------------------------------------------
// PostTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed filter domains.
/// Immutable after load; filtering yields index lists, never mutation.
#[derive(Debug, Clone)]
pub struct PostTable {
    /// All posts (rows), in file order.
    pub posts: Vec<Post>,
    /// Sorted distinct platforms present in the data.
    pub platforms: BTreeSet<String>,
    /// Sorted distinct influencer handles (rows without a handle contribute
    /// nothing here).
    pub influencers: BTreeSet<String>,
    /// Earliest post date in the data.
    pub min_date: NaiveDate,
    /// Latest post date in the data.
    pub max_date: NaiveDate,
}

impl PostTable {
    /// Build filter domains from the loaded posts.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let mut platforms = BTreeSet::new();
        let mut influencers = BTreeSet::new();

        for post in &posts {
            platforms.insert(post.platform.clone());
            if let Some(handle) = &post.influencer {
                influencers.insert(handle.clone());
            }
        }

        let min_date = posts.iter().map(|p| p.date).min().unwrap_or_default();
        let max_date = posts.iter().map(|p| p.date).max().unwrap_or_default();

        PostTable {
            posts,
            platforms,
            influencers,
            min_date,
            max_date,
        }
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
