use thiserror::Error;

/// Errors surfaced by the salary queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightsError {
    /// No listing carried a usable value in the aggregated column.
    #[error("no valid salary in column '{column}'")]
    NoSalaryAvailable { column: &'static str },

    /// An all-digit value in the aggregated column does not fit in an `i64`.
    #[error("salary in column '{column}' is too large")]
    SalaryOverflow { column: &'static str },

    /// Missing, unparsable or inverted salary bounds, or an unparsable
    /// candidate salary.
    #[error("invalid salary range")]
    InvalidRange,
}
