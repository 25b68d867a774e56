//! Capital Bikeshare Prometheus exporter.
//!
//! Polls the public GBFS feed (regions, station information, station status
//! and vehicle types), joins it into one record per station and republishes
//! it as labelled gauges for Prometheus to scrape.

pub mod cache;
pub mod config;
pub mod domain;
pub mod gbfs;
pub mod metrics;
pub mod stations;
pub mod web;
