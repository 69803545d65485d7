//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - scrape: Fetch tools from Product Hunt and GitHub Trending
//! - merge: Deduplicate and sort the catalog, record new tools
//! - alert: Email new tools, commit and push the catalog
//! - daily: scrape, merge and alert in one go
//! - tools: List catalog entries
//! - ask: One-shot chat question
//! - serve: Web chat UI
//! - state reset: Drop pending alerts
pub mod alert;
pub mod ask;
pub mod config;
pub mod daily;
pub mod merge;
pub mod scrape;
pub mod serve;
pub mod state;
pub mod tools;
