use std::path::Path;

use anyhow::Result;
use log::debug;

use super::error::InsightsError;
use crate::data::loader::read;
use crate::data::model::JobListing;

pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";

/// Placeholder the source data uses for "no usable number".
pub const INVALID_SENTINEL: &str = "invalid";

// ---------------------------------------------------------------------------
// Candidate salary: integer or integer-valued text
// ---------------------------------------------------------------------------

/// A salary to test against listing ranges, as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSalary {
    Int(i64),
    Text(String),
}

impl CandidateSalary {
    /// Normalise to an integer through [`parse_salary`].
    pub fn resolve(&self) -> Result<i64, InsightsError> {
        match self {
            CandidateSalary::Int(v) => Ok(*v),
            CandidateSalary::Text(s) => parse_salary(s),
        }
    }
}

impl From<i64> for CandidateSalary {
    fn from(v: i64) -> Self {
        CandidateSalary::Int(v)
    }
}

impl From<i32> for CandidateSalary {
    fn from(v: i32) -> Self {
        CandidateSalary::Int(v.into())
    }
}

impl From<u32> for CandidateSalary {
    fn from(v: u32) -> Self {
        CandidateSalary::Int(v.into())
    }
}

impl From<&str> for CandidateSalary {
    fn from(s: &str) -> Self {
        CandidateSalary::Text(s.to_string())
    }
}

impl From<String> for CandidateSalary {
    fn from(s: String) -> Self {
        CandidateSalary::Text(s)
    }
}

/// Parse an integer salary token.
///
/// Surrounding whitespace is ignored and a leading `+`/`-` is accepted; the
/// rest must be decimal digits that fit in an `i64`.
pub fn parse_salary(text: &str) -> Result<i64, InsightsError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InsightsError::InvalidRange)
}

// ---------------------------------------------------------------------------
// Extremum queries
// ---------------------------------------------------------------------------

/// Highest `max_salary` across all listings in the file at `path`.
pub fn get_max_salary(path: &Path) -> Result<i64> {
    let dataset = read(path)?;
    Ok(max_salary(&dataset.listings)?)
}

/// Lowest `min_salary` across all listings in the file at `path`.
pub fn get_min_salary(path: &Path) -> Result<i64> {
    let dataset = read(path)?;
    Ok(min_salary(&dataset.listings)?)
}

/// Highest qualifying `max_salary` among `listings`.
pub fn max_salary(listings: &[JobListing]) -> Result<i64, InsightsError> {
    salary_values(listings, MAX_SALARY)?
        .into_iter()
        .max()
        .ok_or(InsightsError::NoSalaryAvailable { column: MAX_SALARY })
}

/// Lowest qualifying `min_salary` among `listings`.
pub fn min_salary(listings: &[JobListing]) -> Result<i64, InsightsError> {
    salary_values(listings, MIN_SALARY)?
        .into_iter()
        .min()
        .ok_or(InsightsError::NoSalaryAvailable { column: MIN_SALARY })
}

/// Values of `column` that are non-empty, not the sentinel and all ASCII
/// digits.
///
/// A digit token past `i64::MAX` fails the whole query with
/// [`InsightsError::SalaryOverflow`] instead of being skipped.
fn salary_values(
    listings: &[JobListing],
    column: &'static str,
) -> Result<Vec<i64>, InsightsError> {
    let values = listings
        .iter()
        .filter_map(|listing| listing.get(column))
        .filter(|v| is_salary_token(v))
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| InsightsError::SalaryOverflow { column })
        })
        .collect::<Result<Vec<i64>, _>>()?;
    debug!("{} qualifying values in '{column}'", values.len());
    Ok(values)
}

fn is_salary_token(value: &str) -> bool {
    !value.is_empty()
        && value != INVALID_SENTINEL
        && value.bytes().all(|b| b.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Range queries
// ---------------------------------------------------------------------------

/// Whether `salary` lies within the listing's `[min_salary, max_salary]`.
///
/// Fails with [`InsightsError::InvalidRange`] when either bound is missing or
/// not an integer, when `min_salary > max_salary`, or when `salary` itself is
/// not an integer.
pub fn matches_salary_range(
    listing: &JobListing,
    salary: impl Into<CandidateSalary>,
) -> Result<bool, InsightsError> {
    let salary: CandidateSalary = salary.into();
    matches_resolved(listing, salary.resolve())
}

/// Listings whose salary range contains `salary`, in input order.
///
/// Listings with an invalid range are left out.
pub fn filter_by_salary_range(
    listings: &[JobListing],
    salary: impl Into<CandidateSalary>,
) -> Vec<&JobListing> {
    let salary: CandidateSalary = salary.into();
    let salary = salary.resolve();
    listings
        .iter()
        .map(|listing| (listing, matches_resolved(listing, salary)))
        .filter_map(|(listing, outcome)| match outcome {
            Ok(true) => Some(listing),
            Ok(false) | Err(_) => None,
        })
        .collect()
}

fn matches_resolved(
    listing: &JobListing,
    salary: Result<i64, InsightsError>,
) -> Result<bool, InsightsError> {
    let min = listing.get(MIN_SALARY).ok_or(InsightsError::InvalidRange)?;
    let max = listing.get(MAX_SALARY).ok_or(InsightsError::InvalidRange)?;
    let (min, max, salary) = (parse_salary(min)?, parse_salary(max)?, salary?);
    if min > max {
        return Err(InsightsError::InvalidRange);
    }
    Ok(min <= salary && salary <= max)
}
