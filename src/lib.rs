//! IPL 2025 advertising analysis report generator.
//!
//! Loads four CSV inputs (advertisers, central contracts, revenue figures,
//! demography summary), derives scored and aggregated tables, and emits them
//! as console reports and per-table CSV exports plus a JSON summary.

pub mod loader;
pub mod output;
pub mod reference;
pub mod reports;
pub mod types;
pub mod util;
