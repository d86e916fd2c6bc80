//! Unit tests for column lookups.

use job_insights::data::filter::filter_by_column;
use job_insights::{JobDataset, JobListing};

use crate::helpers::listing;

fn dataset() -> JobDataset {
    let listings: Vec<JobListing> = vec![
        listing(&[("job_type", "FULL_TIME"), ("industry", "Finance")]),
        listing(&[("job_type", "INTERN"), ("industry", "Retail")]),
        listing(&[("job_type", "FULL_TIME"), ("industry", "Retail")]),
        listing(&[("industry", "Finance")]),
    ];
    JobDataset::from_listings(vec!["job_type".into(), "industry".into()], listings)
}

#[test]
fn test_filter_by_column_keeps_dataset_order() {
    let ds = dataset();
    let full_time = filter_by_column(&ds, "job_type", "FULL_TIME");
    assert_eq!(full_time, vec![&ds.listings[0], &ds.listings[2]]);

    let retail = filter_by_column(&ds, "industry", "Retail");
    assert_eq!(retail, vec![&ds.listings[1], &ds.listings[2]]);
}

#[test]
fn test_filter_by_column_without_match_is_empty() {
    let ds = dataset();
    assert!(filter_by_column(&ds, "job_type", "CONTRACTOR").is_empty());
    assert!(filter_by_column(&ds, "salary", "FULL_TIME").is_empty());
}

#[test]
fn test_filter_by_column_skips_rows_missing_the_column() {
    let ds = dataset();
    // Row 3 has no job_type; an empty value must not match it.
    assert!(filter_by_column(&ds, "job_type", "").is_empty());
}

#[test]
fn test_unique_values_cover_every_row() {
    let ds = dataset();
    let job_types: Vec<_> = ds.unique_values("job_type").unwrap().iter().collect();
    assert_eq!(job_types, ["FULL_TIME", "INTERN"]);
    assert_eq!(ds.column_names, ["job_type", "industry"]);
}
