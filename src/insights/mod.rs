//! Queries over loaded job listings: salary extremes, salary range matching
//! and keyword counts.

pub mod counter;
pub mod error;
pub mod salaries;

pub use counter::{count_in_column, count_occurrences};
pub use error::InsightsError;
pub use salaries::{
    CandidateSalary, filter_by_salary_range, get_max_salary, get_min_salary,
    matches_salary_range, max_salary, min_salary, parse_salary,
};
