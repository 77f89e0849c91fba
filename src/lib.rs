//! Mock MinWinTid time-data service for Vaktor integration testing.
//!
//! This crate simulates the upstream MinWinTid HR endpoints that Vaktor reads
//! timesheets from. For a requested date range it generates one record per
//! calendar day with randomized clock-in/out punches and a salary-position
//! allocation, then embeds the day list as a JSON-encoded string (`dager`)
//! inside the variant-specific envelope, exactly as the real endpoints do.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
