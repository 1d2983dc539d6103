//! Crawler module for page fetching, listing extraction, and coordination
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with per-page error classification
//! - Listing extraction from result-page markup
//! - Bounded-concurrency coordination under a global deadline

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{Coordinator, CrawlResult, RunStatus};
pub use fetcher::{build_http_client, fetch_page};
pub use parser::{extract_listings, Listing};

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It validates the
/// configuration, builds the HTTP client, runs the page tasks to a terminal
/// state, and returns everything gathered, including partial results when
/// the run is truncated by the deadline.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlResult)` - The listings and accounting for the run
/// * `Err(ScoutError)` - Invalid configuration or HTTP client failure
pub async fn crawl(config: Config) -> Result<CrawlResult> {
    Coordinator::new(config)?.run().await
}
