//! Contributor list builder for the documentation site
//!
//! - GitHub REST call lives in `interfaces_github_contributors`
//! - Bot filtering in `bots`, record models and filtering in `contributors/`
//! - JSON output in `output`
//! - Reads optional GITHUB_TOKEN env var to raise API rate limits

pub mod bots;
pub mod config;
pub mod contributors;
pub mod output;
pub mod run;
