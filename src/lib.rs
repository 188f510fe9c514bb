//! Parses ferry sailing records and summarises how often sailings run late,
//! per route and per day.

pub mod args;
pub mod dataset;
pub mod errors;
pub mod report;
pub mod sailing;
pub mod stats;
