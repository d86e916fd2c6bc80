use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// JobListing – one row of the source file
// ---------------------------------------------------------------------------

/// A single job listing: column name → raw text value.
///
/// Values are kept exactly as extracted from the source. An empty string and
/// the sentinel `"invalid"` are ordinary values here; interpreting them is up
/// to the queries in [`crate::insights`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobListing {
    pub fields: BTreeMap<String, String>,
}

impl JobListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `column`, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }
}

impl<K, V> FromIterator<(K, V)> for JobListing
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JobListing {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// JobDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column indices.
#[derive(Debug, Clone, Default)]
pub struct JobDataset {
    /// All listings, in file order.
    pub listings: Vec<JobListing>,
    /// Column names in source order.
    pub column_names: Vec<String>,
    /// For each column the sorted set of distinct values.
    pub unique_values: BTreeMap<String, BTreeSet<String>>,
}

impl JobDataset {
    /// Build column indices from the loaded listings.
    ///
    /// `column_names` keeps the order the source declared. Columns that only
    /// show up in some rows (JSON objects with extra keys) are appended in
    /// sorted order.
    pub fn from_listings(column_names: Vec<String>, listings: Vec<JobListing>) -> Self {
        let mut column_names = column_names;
        let mut unique_values: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for listing in &listings {
            for (col, val) in &listing.fields {
                unique_values
                    .entry(col.clone())
                    .or_default()
                    .insert(val.clone());
            }
        }

        let declared: BTreeSet<String> = column_names.iter().cloned().collect();
        column_names.extend(
            unique_values
                .keys()
                .filter(|col| !declared.contains(*col))
                .cloned(),
        );

        JobDataset {
            listings,
            column_names,
            unique_values,
        }
    }

    /// Distinct values of `column`, sorted.
    pub fn unique_values(&self, column: &str) -> Option<&BTreeSet<String>> {
        self.unique_values.get(column)
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
