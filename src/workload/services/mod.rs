//! Reporting services for workload aggregation.

mod reports;

pub use reports::{WorkloadError, WorkloadResult, WorkloadService};
