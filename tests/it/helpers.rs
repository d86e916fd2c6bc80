//! Test helpers: temp fixture files and row builders.

use std::path::PathBuf;

use job_insights::JobListing;
use tempfile::TempDir;

/// Header plus a handful of listings covering every salary edge case.
pub const JOBS_CSV: &str = "\
job_title,industry,job_type,min_salary,max_salary,description
Data Engineer,Technology,FULL_TIME,50000,90000,Python and SQL daily
QA Analyst,Finance,PART_TIME,,100,Write tests in python
Backend Developer,Technology,FULL_TIME,invalid,invalid,JavaScript and Rust
Product Manager,Retail,CONTRACTOR,90000,50000,Roadmaps
Intern,Healthcare,INTERN,1500,2000,Learn PYTHON
";

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A temp directory holding a single file; keep the dir alive while the
/// path is used.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn fixture(name: &str, contents: &[u8]) -> Fixture {
    init_logging();
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    Fixture { _dir: dir, path }
}

pub fn listing(pairs: &[(&str, &str)]) -> JobListing {
    pairs.iter().copied().collect()
}

pub fn salary_range(min: &str, max: &str) -> JobListing {
    listing(&[("min_salary", min), ("max_salary", max)])
}
