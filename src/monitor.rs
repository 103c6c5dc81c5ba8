use crate::{
    config::{MonitorConfig, Target},
    error::MonitorError,
    fetch::{Fetcher, HttpFetcher, RequestProfile},
    hash::content_hash,
    locate::locate_pdf,
    notify::{Notifier, WebhookNotifier},
    state::HashStore,
};
use scraper::Html;
use tracing::{debug, info, warn};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No previous hash: monitoring begins with this one.
    Started { url: String, hash: String },
    Changed {
        url: String,
        previous: String,
        current: String,
    },
    Unchanged { url: String, hash: String },
    ResolveFailed { reason: String },
    FetchFailed { url: String, reason: String },
}

pub struct Monitor<F, N> {
    config: MonitorConfig,
    fetcher: F,
    notifier: N,
    store: HashStore,
}

impl Monitor<HttpFetcher, WebhookNotifier> {
    pub fn with_http(config: MonitorConfig) -> Self {
        let client = reqwest::Client::new();
        let notifier = WebhookNotifier::new(client.clone(), config.webhook.clone());
        if !notifier.is_configured() {
            info!("Notifications disabled, set DISCORD_WEBHOOK to enable them");
        }
        Self::new(config, HttpFetcher::new(client), notifier)
    }
}

impl<F, N> Monitor<F, N>
where
    F: Fetcher,
    N: Notifier,
{
    pub fn new(config: MonitorConfig, fetcher: F, notifier: N) -> Self {
        let store = HashStore::new(config.hash_file.clone());
        Self {
            config,
            fetcher,
            notifier,
            store,
        }
    }

    pub async fn resolve_target_url(&self) -> Result<String, MonitorError> {
        match &self.config.target {
            Target::Fixed { url } => Ok(url.clone()),
            Target::Scrape {
                page_url,
                target_text,
            } => {
                let html = self
                    .fetcher
                    .get_text(page_url, RequestProfile::BrowserPage)
                    .await?;
                let url = {
                    let doc = Html::parse_document(&html);
                    locate_pdf(&doc, page_url, target_text)?
                };
                debug!("Found PDF {}", url);
                Ok(url)
            }
        }
    }

    pub async fn fetch_and_hash(&self, url: &str) -> Result<String, MonitorError> {
        let profile = match self.config.target {
            Target::Fixed { .. } => RequestProfile::Plain,
            Target::Scrape { .. } => RequestProfile::Browser,
        };
        let content = self.fetcher.get_bytes(url, profile).await?;
        Ok(content_hash(&content))
    }

    fn started_message(&self, url: &str) -> String {
        match self.config.target {
            Target::Fixed { .. } => "🔍 GitHub Actions: Started monitoring the PDF.".to_string(),
            Target::Scrape { .. } => format!("🔍 Started monitoring:\n{}", url),
        }
    }

    /// One check. Scraped targets report resolve and download failures
    /// through the notifier and end normally; a fixed target returns the
    /// download error instead.
    pub async fn run(&self) -> Result<Outcome, MonitorError> {
        let url = match self.resolve_target_url().await {
            Ok(url) => url,
            Err(e) => {
                warn!("Error finding PDF: {}", e);
                self.notifier
                    .notify(&format!("❌ Error finding PDF: {}", e))
                    .await?;
                return Ok(Outcome::ResolveFailed {
                    reason: e.to_string(),
                });
            }
        };

        debug!("Checking {} against {}", url, self.store.path().display());
        let previous = self.store.load().await?;

        let current = match self.fetch_and_hash(&url).await {
            Ok(hash) => hash,
            Err(e) if self.config.target.reports_failures() => {
                warn!("Error downloading PDF: {}", e);
                self.notifier
                    .notify(&format!("❌ Error downloading PDF: {}", e))
                    .await?;
                return Ok(Outcome::FetchFailed {
                    url,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        match previous {
            None => {
                info!("Started monitoring {}", url);
                self.notifier.notify(&self.started_message(&url)).await?;
                self.store.save(&current).await?;
                Ok(Outcome::Started { url, hash: current })
            }
            Some(previous) if previous != current => {
                info!("PDF changed: {} -> {}", previous, current);
                self.notifier
                    .notify(&format!("⚠️ **PDF changed!**\n{}", url))
                    .await?;
                self.store.save(&current).await?;
                Ok(Outcome::Changed {
                    url,
                    previous,
                    current,
                })
            }
            Some(_) => {
                info!("No change detected.");
                Ok(Outcome::Unchanged { url, hash: current })
            }
        }
    }
}
