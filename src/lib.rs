//! Bundle Stats
//!
//! Generates the README shipped next to the plotly.js dist bundles:
//! bundle sizes (raw, minified, gzipped) and the trace modules each
//! partial bundle packages, scraped from its entry file.
//!
//! This crate provides the core implementation for the
//! `bundle-stats` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! bundle-stats --root path/to/plotly.js
//! ```

pub mod bundle;
pub mod commands;
pub mod output;
pub mod parser;
pub mod sizes;
pub mod utils;
