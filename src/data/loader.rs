use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use super::model::{extract_influencer, Post, PostTable};

/// Fixed relative path the dashboard reads at startup.
pub const DEFAULT_CSV_PATH: &str = "SwizzleSip.csv";

/// Header columns the CSV must provide.
const REQUIRED_COLUMNS: [&str; 5] = [
    "Date",
    "Platform",
    "Influencer_Brand",
    "Engagements",
    "Sentiment",
];

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the engagement table from a CSV file.
///
/// Expected layout: header row with at least the columns in
/// [`REQUIRED_COLUMNS`]; extra columns are ignored. Fails on a missing or
/// unreadable file, a missing column, an unparseable date, or a
/// non-integer engagement count.
pub fn load_csv(path: &Path) -> Result<PostTable> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column_index = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let [date_idx, platform_idx, brand_idx, engagements_idx, sentiment_idx] = [
        column_index(REQUIRED_COLUMNS[0])?,
        column_index(REQUIRED_COLUMNS[1])?,
        column_index(REQUIRED_COLUMNS[2])?,
        column_index(REQUIRED_COLUMNS[3])?,
        column_index(REQUIRED_COLUMNS[4])?,
    ];

    let mut posts = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let date = parse_date(record.get(date_idx).unwrap_or(""))
            .with_context(|| format!("CSV row {row_no}: invalid 'Date'"))?;
        let engagements: u64 = record
            .get(engagements_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| {
                format!("CSV row {row_no}: 'Engagements' is not a non-negative integer")
            })?;
        let influencer_brand = record.get(brand_idx).unwrap_or("").to_string();

        posts.push(Post {
            date,
            platform: record.get(platform_idx).unwrap_or("").trim().to_string(),
            influencer: extract_influencer(&influencer_brand),
            influencer_brand,
            engagements,
            sentiment: record.get(sentiment_idx).unwrap_or("").trim().to_string(),
        });
    }

    if posts.is_empty() {
        bail!("{} contains no data rows", path.display());
    }

    Ok(PostTable::from_posts(posts))
}

/// Parse a calendar date, accepting ISO (`2024-03-01`) and US
/// (`03/01/2024`) layouts.
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }
    bail!("'{s}' is not a recognised date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("swizzle_dash_{name}_{}.csv", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_csv() {
        let path = write_temp_csv(
            "ok",
            "Date,Platform,Influencer_Brand,Engagements,Sentiment\n\
             2024-03-01,TikTok,Review by @eco.mama !!,1200,Positive\n\
             2024-03-02,Instagram,No handle here,300,Neutral\n",
        );
        let table = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.len(), 2);
        assert_eq!(table.posts[0].influencer.as_deref(), Some("@eco.mama"));
        assert_eq!(table.posts[0].engagements, 1200);
        assert_eq!(table.posts[1].influencer, None);
        assert_eq!(table.influencers.len(), 1);
    }

    #[test]
    fn accepts_us_date_layout() {
        let path = write_temp_csv(
            "usdate",
            "Date,Platform,Influencer_Brand,Engagements,Sentiment\n\
             03/15/2024,X,@fizz_fan,10,Negative\n",
        );
        let table = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            table.posts[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let path = write_temp_csv(
            "missing_col",
            "Date,Platform,Engagements,Sentiment\n2024-03-01,TikTok,5,Positive\n",
        );
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.to_string().contains("Influencer_Brand"));
    }

    #[test]
    fn bad_engagement_count_is_an_error() {
        let path = write_temp_csv(
            "bad_count",
            "Date,Platform,Influencer_Brand,Engagements,Sentiment\n\
             2024-03-01,TikTok,@a,-5,Positive\n",
        );
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.to_string().contains("Engagements"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_csv(Path::new("/nonexistent/SwizzleSip.csv")).is_err());
    }

    #[test]
    fn headers_only_is_an_error() {
        let path = write_temp_csv(
            "empty",
            "Date,Platform,Influencer_Brand,Engagements,Sentiment\n",
        );
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.to_string().contains("no data rows"));
    }
}
