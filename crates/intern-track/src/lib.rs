//! Internship application tracking: a typed record domain, a storage seam,
//! the tracker service, CSV import, and the status flow aggregation that
//! powers the Sankey pipeline view.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracker;
