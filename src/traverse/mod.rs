//! Traversal controller
//!
//! The controller owns the frontier/visited state and drives the full run:
//! seed the frontier from the index pages, process every frontier URL in
//! lexicographic order, expand same-author subpages one level deep, and
//! hand the accumulated records to the deduplicator. Every page failure is
//! contained at page granularity: logged, counted as zero records and zero
//! candidates, and the run moves on.

mod state;

pub use state::TraversalState;

use crate::config::Config;
use crate::discover::{discover, subpage_candidates};
use crate::extract::extract_page;
use crate::fetch::{build_http_client, fetch_page, FixedDelay, Pause, Throttle};
use crate::output::{write_records, CheckpointWriter};
use crate::records::{dedup_records, PoemRecord};
use crate::segment::segment_page;
use crate::{Result, ScrapeError};
use reqwest::Client;
use scraper::Html;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// A page-level failure; never propagates past the controller
#[derive(Debug, Error)]
pub enum PageError {
    #[error("fetch failed for {url}: {source}")]
    Fetch { url: String, source: ScrapeError },

    #[error("extraction failed for {url}: {message}")]
    Extract { url: String, message: String },
}

/// What one successfully processed page yields
#[derive(Debug, Default)]
pub struct PageHarvest {
    /// Records segmented from the page, in document order
    pub records: Vec<PoemRecord>,

    /// Same-author subpage candidates found on the page
    pub subpages: BTreeSet<Url>,
}

/// Drives one full scrape run
pub struct Controller {
    config: Config,
    client: Client,
    throttle: Box<dyn Throttle>,
    checkpoint: CheckpointWriter,
    state: TraversalState,
}

impl Controller {
    /// Creates a controller with the configured fixed-delay limiter
    pub fn new(config: Config) -> Result<Self> {
        let throttle = Box::new(FixedDelay::from_limits(&config.limits));
        Self::with_throttle(config, throttle)
    }

    /// Creates a controller with an injected rate limiter
    ///
    /// Tests pass a zero-delay limiter here so runs do not sleep on the
    /// wall clock.
    pub fn with_throttle(config: Config, throttle: Box<dyn Throttle>) -> Result<Self> {
        crate::config::validate(&config)?;
        let client = build_http_client(&config.limits)?;
        let checkpoint = CheckpointWriter::new(
            Path::new(&config.output.checkpoint_path),
            config.limits.checkpoint_interval,
        );

        Ok(Self {
            config,
            client,
            throttle,
            checkpoint,
            state: TraversalState::new(),
        })
    }

    /// Runs the full traversal and returns the deduplicated records
    pub async fn run(mut self) -> Result<Vec<PoemRecord>> {
        self.seed_frontier().await;

        let frontier: Vec<Url> = self.state.frontier.iter().cloned().collect();
        let total = frontier.len();
        tracing::info!(pages = total, "frontier seeded");

        for (position, url) in frontier.iter().enumerate() {
            if self.state.is_visited(url) {
                continue;
            }

            tracing::info!("[{}/{}] {}", position + 1, total, url);

            match self.process_page(url).await {
                Ok(harvest) => {
                    self.state.mark_visited(url.clone());
                    let found = harvest.records.len();
                    self.append_records(harvest.records);
                    if found > 0 {
                        tracing::info!(records = found, "page yielded records");
                    } else {
                        tracing::debug!("no records on page");
                    }

                    self.expand_subpages(harvest.subpages).await;
                }
                Err(error) => {
                    tracing::warn!("skipping page: {}", error);
                    self.state.mark_visited(url.clone());
                }
            }

            self.pause(Pause::Page).await;
        }

        tracing::info!(
            total = self.state.records.len(),
            "traversal complete, deduplicating"
        );
        Ok(dedup_records(std::mem::take(&mut self.state.records)))
    }

    /// Seeds the frontier by discovering links on every index page
    ///
    /// Index fetch failures are logged and skipped like any other page
    /// failure; seeding proceeds with whatever the remaining indexes
    /// yield.
    async fn seed_frontier(&mut self) {
        let index_pages = self.config.site.index_pages.clone();

        for page in &index_pages {
            let url = match Url::parse(page) {
                Ok(url) => url,
                Err(error) => {
                    tracing::warn!("skipping index {}: {}", page, error);
                    continue;
                }
            };

            tracing::info!("exploring index {}", url);

            match fetch_page(&self.client, &url).await {
                Ok(body) => {
                    let document = Html::parse_document(&body);
                    let links = discover(&url, &document, &self.config.site);
                    tracing::debug!(found = links.len(), "index links discovered");
                    self.state.frontier.extend(links);
                }
                Err(error) => {
                    tracing::warn!("skipping index {}: {}", url, error);
                }
            }

            self.pause(Pause::Index).await;
        }
    }

    /// Fetches and segments one page
    async fn process_page(&self, url: &Url) -> std::result::Result<PageHarvest, PageError> {
        let body = fetch_page(&self.client, url)
            .await
            .map_err(|source| PageError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let document = Html::parse_document(&body);
        let content = extract_page(&document);
        let records = segment_page(&content, url.as_str());
        let subpages = subpage_candidates(url, &document, &self.config.site);

        Ok(PageHarvest { records, subpages })
    }

    /// Processes accepted subpage candidates, one level deep
    ///
    /// A candidate is fetched immediately when it is unvisited and not a
    /// top-level frontier member. Subpages of subpages are never expanded:
    /// the candidates a subpage reports are dropped.
    async fn expand_subpages(&mut self, candidates: BTreeSet<Url>) {
        for subpage in candidates {
            if self.state.is_visited(&subpage) || self.state.in_frontier(&subpage) {
                continue;
            }

            tracing::info!("subpage {}", subpage);

            match self.process_page(&subpage).await {
                Ok(harvest) => {
                    self.state.mark_visited(subpage);
                    self.append_records(harvest.records);
                }
                Err(error) => {
                    tracing::warn!("skipping subpage: {}", error);
                    self.state.mark_visited(subpage);
                }
            }

            self.pause(Pause::Page).await;
        }
    }

    /// Appends a page's records and checkpoints when the accumulator is due
    fn append_records(&mut self, records: Vec<PoemRecord>) {
        self.state.records.extend(records);
        self.checkpoint.maybe_save(&self.state.records);
    }

    async fn pause(&self, kind: Pause) {
        let delay = self.throttle.delay_for(kind);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Runs one full scrape: traverse, deduplicate, persist
///
/// This is the whole pipeline behind the binary. Page failures never abort
/// the run; the only fatal errors are an invalid configuration and the
/// final output write.
///
/// # Arguments
///
/// * `config` - The run configuration
///
/// # Returns
///
/// * `Ok(Vec<PoemRecord>)` - The deduplicated records, also written to disk
/// * `Err(ScrapeError)` - Startup or final persistence failed
pub async fn run_scrape(config: Config) -> Result<Vec<PoemRecord>> {
    let records_path = config.output.records_path.clone();

    let controller = Controller::new(config)?;
    let records = controller.run().await?;

    write_records(Path::new(&records_path), &records)?;
    tracing::info!(
        unique = records.len(),
        path = %records_path,
        "final collection written"
    );

    Ok(records)
}
