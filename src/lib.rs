pub mod data;
pub mod insights;

pub use data::loader::{ReaderOptions, read, read_with};
pub use data::model::{JobDataset, JobListing};
pub use insights::InsightsError;
