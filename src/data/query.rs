use std::collections::BTreeMap;
use std::fmt;

use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Site filter: "All Sites" sentinel or one specific launch site
// ---------------------------------------------------------------------------

/// Current site selection. A site value not present in the dataset is not an
/// error; queries simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteFilter {
    #[default]
    AllSites,
    Site(String),
}

impl SiteFilter {
    /// Whether a record at the given site passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteFilter::AllSites => true,
            SiteFilter::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::AllSites => write!(f, "All Sites"),
            SiteFilter::Site(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregator – success counts for the pie chart
// ---------------------------------------------------------------------------

/// Compute the (label, value) pairs for the success pie chart.
///
/// * All sites: one pair per site in sorted site order, value = number of
///   successful launches at that site (failures are not shown in this mode).
/// * One site: exactly two pairs, `("Success", n)` and `("Failure", m)`.
///   A category with no records counts as zero rather than being absent,
///   so a site with only successes (or only failures) still yields both
///   pairs. An unknown site yields two zero pairs.
pub fn aggregate(dataset: &LaunchDataset, site_filter: &SiteFilter) -> Vec<(String, u64)> {
    match site_filter {
        SiteFilter::AllSites => {
            let mut per_site: BTreeMap<&str, u64> = BTreeMap::new();
            for r in &dataset.records {
                let count = per_site.entry(r.site.as_str()).or_insert(0);
                if r.outcome.is_success() {
                    *count += 1;
                }
            }
            per_site
                .into_iter()
                .map(|(site, n)| (site.to_string(), n))
                .collect()
        }
        SiteFilter::Site(site) => {
            let mut successes = 0u64;
            let mut failures = 0u64;
            for r in dataset.records.iter().filter(|r| r.site == *site) {
                if r.outcome.is_success() {
                    successes += 1;
                } else {
                    failures += 1;
                }
            }
            vec![
                ("Success".to_string(), successes),
                ("Failure".to_string(), failures),
            ]
        }
    }
}

// ---------------------------------------------------------------------------
// RangeFilter – record subset for the scatter chart
// ---------------------------------------------------------------------------

/// Indices of records whose payload mass lies within `[lo, hi]` (inclusive
/// on both ends) and whose site passes `site_filter`.
///
/// Order is stable: same relative order as the source dataset. `lo > hi`
/// yields an empty result; no reordering of the bounds is performed.
pub fn filter_for_scatter(
    dataset: &LaunchDataset,
    site_filter: &SiteFilter,
    lo: f64,
    hi: f64,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            site_filter.matches(&r.site)
                && r.payload_mass_kg >= lo
                && r.payload_mass_kg <= hi
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Chart inputs – what the rendering layer consumes
// ---------------------------------------------------------------------------

/// Input for the proportion chart: a title plus (label, value) slices.
#[derive(Debug, Clone, PartialEq)]
pub struct PieInput {
    pub title: String,
    pub slices: Vec<(String, u64)>,
}

impl PieInput {
    /// Sum of all slice values; a zero total means there is nothing to draw.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|(_, v)| v).sum()
    }
}

/// One scatter point: payload on x, class on y, booster category for colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: f64,
    pub booster_category: String,
}

/// Input for the scatter chart: points plus title and axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterInput {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// Build the success pie input for the current site selection.
pub fn build_success_pie(dataset: &LaunchDataset, site_filter: &SiteFilter) -> PieInput {
    let title = match site_filter {
        SiteFilter::AllSites => "Total Successful Launches by Launch Site".to_string(),
        SiteFilter::Site(_) => "Success Rate by Launch Site".to_string(),
    };
    PieInput {
        title,
        slices: aggregate(dataset, site_filter),
    }
}

/// Build the payload scatter input for the current site and payload range.
pub fn build_payload_scatter(
    dataset: &LaunchDataset,
    site_filter: &SiteFilter,
    lo: f64,
    hi: f64,
) -> ScatterInput {
    let title = match site_filter {
        SiteFilter::AllSites => "Successful vs Unsuccessful for Payload Range".to_string(),
        SiteFilter::Site(_) => {
            "Successful vs Unsuccessful for Payload Range and Selected Site".to_string()
        }
    };
    let points = filter_for_scatter(dataset, site_filter, lo, hi)
        .into_iter()
        .map(|i| {
            let r = &dataset.records[i];
            ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                class: r.outcome.class(),
                booster_category: r.booster_category.clone(),
            }
        })
        .collect();
    ScatterInput {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "Class".to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(site: &str, payload: f64, booster: &str, class: i64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome: Outcome::from_class(class).unwrap(),
        }
    }

    /// The three-record example dataset used throughout.
    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("siteA", 500.0, "boosterX", 1),
            rec("siteA", 1500.0, "boosterY", 0),
            rec("siteB", 800.0, "boosterX", 1),
        ])
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let pairs = aggregate(&sample(), &SiteFilter::AllSites);
        assert_eq!(
            pairs,
            vec![("siteA".to_string(), 1), ("siteB".to_string(), 1)]
        );
    }

    #[test]
    fn all_sites_totals_match_dataset_successes() {
        let ds = sample();
        let pairs = aggregate(&ds, &SiteFilter::AllSites);
        let total: u64 = pairs.iter().map(|(_, n)| n).sum();
        let expected = ds.records.iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(total as usize, expected);
    }

    #[test]
    fn single_site_returns_success_and_failure_pair() {
        let pairs = aggregate(&sample(), &SiteFilter::Site("siteA".to_string()));
        assert_eq!(
            pairs,
            vec![("Success".to_string(), 1), ("Failure".to_string(), 1)]
        );
    }

    #[test]
    fn single_site_pair_values_sum_to_site_record_count() {
        let ds = sample();
        let pairs = aggregate(&ds, &SiteFilter::Site("siteA".to_string()));
        assert_eq!(pairs.len(), 2);
        let total: u64 = pairs.iter().map(|(_, n)| n).sum();
        let site_records = ds.records.iter().filter(|r| r.site == "siteA").count();
        assert_eq!(total as usize, site_records);
    }

    #[test]
    fn missing_category_defaults_to_zero_instead_of_failing() {
        // siteB has one success and no failures; the failure count must be
        // reported as zero, not skipped.
        let pairs = aggregate(&sample(), &SiteFilter::Site("siteB".to_string()));
        assert_eq!(
            pairs,
            vec![("Success".to_string(), 1), ("Failure".to_string(), 0)]
        );
    }

    #[test]
    fn unknown_site_yields_zero_counts() {
        let pairs = aggregate(&sample(), &SiteFilter::Site("nowhere".to_string()));
        assert_eq!(
            pairs,
            vec![("Success".to_string(), 0), ("Failure".to_string(), 0)]
        );
    }

    #[test]
    fn scatter_filter_is_inclusive_and_order_preserving() {
        let idx = filter_for_scatter(&sample(), &SiteFilter::AllSites, 0.0, 1000.0);
        assert_eq!(idx, vec![0, 2]);

        // Inclusive upper bound.
        let idx = filter_for_scatter(&sample(), &SiteFilter::AllSites, 0.0, 1500.0);
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn scatter_filter_respects_site() {
        let idx = filter_for_scatter(
            &sample(),
            &SiteFilter::Site("siteA".to_string()),
            0.0,
            2000.0,
        );
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn scatter_filter_returns_all_and_only_matching_records() {
        let ds = sample();
        let lo = 400.0;
        let hi = 900.0;
        let idx = filter_for_scatter(&ds, &SiteFilter::AllSites, lo, hi);
        for (i, r) in ds.records.iter().enumerate() {
            let in_range = r.payload_mass_kg >= lo && r.payload_mass_kg <= hi;
            assert_eq!(idx.contains(&i), in_range, "record {i}");
        }
    }

    #[test]
    fn degenerate_range_matches_exact_payload_only() {
        let idx = filter_for_scatter(&sample(), &SiteFilter::AllSites, 500.0, 500.0);
        assert_eq!(idx, vec![0]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let idx = filter_for_scatter(&sample(), &SiteFilter::AllSites, 1000.0, 0.0);
        assert!(idx.is_empty());
    }

    #[test]
    fn unknown_site_scatter_is_empty() {
        let idx = filter_for_scatter(
            &sample(),
            &SiteFilter::Site("nowhere".to_string()),
            0.0,
            10_000.0,
        );
        assert!(idx.is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let ds = sample();
        let f = SiteFilter::Site("siteA".to_string());
        assert_eq!(aggregate(&ds, &f), aggregate(&ds, &f));
        assert_eq!(
            filter_for_scatter(&ds, &f, 0.0, 1000.0),
            filter_for_scatter(&ds, &f, 0.0, 1000.0)
        );
    }

    #[test]
    fn pie_input_carries_mode_specific_title() {
        let ds = sample();
        let all = build_success_pie(&ds, &SiteFilter::AllSites);
        assert_eq!(all.title, "Total Successful Launches by Launch Site");
        assert_eq!(all.total(), 2);

        let one = build_success_pie(&ds, &SiteFilter::Site("siteB".to_string()));
        assert_eq!(one.title, "Success Rate by Launch Site");
        assert_eq!(one.total(), 1);
    }

    #[test]
    fn scatter_input_carries_all_three_plot_fields() {
        let ds = sample();
        let scatter = build_payload_scatter(&ds, &SiteFilter::AllSites, 0.0, 1000.0);
        assert_eq!(scatter.x_label, "Payload Mass (kg)");
        assert_eq!(scatter.y_label, "Class");
        assert_eq!(scatter.points.len(), 2);
        assert_eq!(scatter.points[0].payload_mass_kg, 500.0);
        assert_eq!(scatter.points[0].class, 1.0);
        assert_eq!(scatter.points[0].booster_category, "boosterX");
        assert_eq!(scatter.points[1].booster_category, "boosterX");
    }
}
