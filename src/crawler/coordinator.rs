//! Crawl coordination: admission control, global deadline, result collection
//!
//! A single coordinating task owns the pending page sequence, the in-flight
//! count, and the accumulating result. Page tasks run concurrently, bounded
//! by the admission limit, and hand their outcome back over a channel; they
//! never touch shared state. The coordinator's only suspension point is a
//! race between "the next task finished" and "the global deadline fired".

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::{extract_listings, Listing};
use crate::url::page_urls;
use crate::{FetchError, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use url::Url;

/// Terminal state of a crawl run
///
/// Both states yield whatever records were already collected: timing out is
/// not an error condition for the overall run, only a boundary on how much
/// work is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every page task reached a terminal state before the deadline
    Completed,

    /// The global deadline fired with work still outstanding
    TimedOut,
}

/// Outcome of a single page task, reported back to the coordinator
#[derive(Debug)]
enum PageOutcome {
    /// The page was fetched and extracted; zero listings is a valid outcome
    Completed { page: u32, listings: Vec<Listing> },

    /// The fetch failed; the failure is attributed to this page only
    Failed { page: u32, error: FetchError },
}

/// Everything gathered by the time the run reached a terminal state
#[derive(Debug)]
pub struct CrawlResult {
    /// Listings in task-completion order (ranking happens at report time)
    pub listings: Vec<Listing>,

    /// Pages fetched and extracted successfully
    pub pages_completed: usize,

    /// Pages whose fetch failed
    pub pages_failed: usize,

    /// How the run ended
    pub status: RunStatus,
}

/// Main crawl coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScoutError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config) -> Result<Self> {
        crate::config::validate(&config)?;

        let client = build_http_client()?;

        Ok(Self { config, client })
    }

    /// Runs the crawl to a terminal state
    ///
    /// Dispatch follows sequencer order with at most `max_concurrent_fetches`
    /// page tasks in flight; as one finishes, the next pending page is
    /// admitted. When the deadline elapses, pending pages are never
    /// dispatched and in-flight tasks are abandoned: their late results land
    /// in a closed channel and are dropped, not awaited.
    pub async fn run(&self) -> Result<CrawlResult> {
        let urls = page_urls(&self.config)?;
        let limit = self.config.crawler.max_concurrent_fetches;
        let deadline = Instant::now() + Duration::from_millis(self.config.crawler.timeout_ms);

        tracing::info!(
            "crawling up to {} pages, {} in flight",
            urls.len(),
            limit
        );

        let (tx, mut rx) = mpsc::channel::<PageOutcome>(limit);

        let mut pending = urls.into_iter().enumerate();
        let mut in_flight = 0usize;

        let mut result = CrawlResult {
            listings: Vec::new(),
            pages_completed: 0,
            pages_failed: 0,
            status: RunStatus::Completed,
        };

        // Fill the initial admission window
        while in_flight < limit {
            match pending.next() {
                Some((page, url)) => {
                    self.spawn_page_task(page as u32, url, tx.clone());
                    in_flight += 1;
                }
                None => break,
            }
        }

        while in_flight > 0 {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {
                    tracing::info!("scraping timeout reached");
                    result.status = RunStatus::TimedOut;
                    break;
                }
                outcome = rx.recv() => {
                    // The coordinator holds a sender, so the channel cannot
                    // close while tasks are outstanding
                    let outcome = match outcome {
                        Some(outcome) => outcome,
                        None => break,
                    };
                    in_flight -= 1;

                    match outcome {
                        PageOutcome::Completed { page, listings } => {
                            tracing::debug!(
                                "page {} completed with {} listings",
                                page,
                                listings.len()
                            );
                            result.pages_completed += 1;
                            result.listings.extend(listings);
                        }
                        PageOutcome::Failed { page, error } => {
                            tracing::warn!("page {} failed: {}", page, error);
                            result.pages_failed += 1;
                        }
                    }

                    // A slot opened; admit the next pending page, if any
                    if let Some((page, url)) = pending.next() {
                        self.spawn_page_task(page as u32, url, tx.clone());
                        in_flight += 1;
                    }
                }
            }
        }

        tracing::info!(
            "crawl finished: {} pages completed, {} failed, {} listings",
            result.pages_completed,
            result.pages_failed,
            result.listings.len()
        );

        Ok(result)
    }

    /// Spawns one page task: fetch, extract, report back
    ///
    /// The send is allowed to fail silently: once the coordinator has
    /// finalized the run, a late result is abandoned by contract.
    fn spawn_page_task(&self, page: u32, url: Url, tx: mpsc::Sender<PageOutcome>) {
        let client = self.client.clone();

        tokio::spawn(async move {
            tracing::debug!("fetching page {}: {}", page, url);

            let outcome = match fetch_page(&client, &url).await {
                Ok(body) => PageOutcome::Completed {
                    page,
                    listings: extract_listings(&body),
                },
                Err(error) => PageOutcome::Failed { page, error },
            };

            let _ = tx.send(outcome).await;
        });
    }
}
