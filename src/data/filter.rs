use super::model::{JobDataset, JobListing};

/// Listings whose `column` equals `value`, in dataset order.
///
/// Answers "all jobs of type X" / "all jobs in industry Y". Listings without
/// the column never match.
pub fn filter_by_column<'a>(
    dataset: &'a JobDataset,
    column: &str,
    value: &str,
) -> Vec<&'a JobListing> {
    dataset
        .listings
        .iter()
        .filter(|listing| listing.get(column) == Some(value))
        .collect()
}
