use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PAGE_URL: &str =
    "https://www.aasantarem.pt/classificacoes-campeonato-circuito-de-trail-versao-sprint-2026/";
pub const DEFAULT_TARGET_TEXT: &str = "Trail Versão Sprint 2026 Geral Masc.";
pub const DEFAULT_HASH_FILE: &str = "pdf_hash.txt";
pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK";

/// Where the monitored PDF comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A known PDF url, downloaded as-is.
    Fixed { url: String },
    /// A page scraped for the first `.pdf` anchor whose text contains `target_text`.
    Scrape {
        page_url: String,
        target_text: String,
    },
}

impl Target {
    /// Scraped targets turn resolve and download failures into notifications.
    pub fn reports_failures(&self) -> bool {
        matches!(self, Target::Scrape { .. })
    }
}

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub target: Target,
    pub hash_file: PathBuf,
    /// Webhook url; `None` disables notifications.
    pub webhook: Option<String>,
}

#[derive(Debug, Parser)]
#[command(about = "Watch a published results PDF and post to a webhook when it changes")]
pub struct Args {
    /// Watch this PDF directly instead of scraping a page for it
    #[arg(long, conflicts_with_all = ["page_url", "target_text"])]
    pub pdf_url: Option<String>,

    /// Page listing the PDF
    #[arg(long, default_value = DEFAULT_PAGE_URL)]
    pub page_url: String,

    /// Text of the link pointing to the PDF (case-insensitive)
    #[arg(long, default_value = DEFAULT_TARGET_TEXT)]
    pub target_text: String,

    /// File keeping the hash of the last seen PDF
    #[arg(long, default_value = DEFAULT_HASH_FILE)]
    pub hash_file: PathBuf,

    /// Webhook receiving the notifications
    #[arg(long, env = WEBHOOK_ENV, hide_env_values = true)]
    pub webhook: Option<String>,
}

impl Args {
    pub fn into_config(self) -> MonitorConfig {
        let target = match self.pdf_url {
            Some(url) => Target::Fixed { url },
            None => Target::Scrape {
                page_url: self.page_url,
                target_text: self.target_text,
            },
        };

        MonitorConfig {
            target,
            hash_file: self.hash_file,
            webhook: self.webhook.filter(|w| !w.trim().is_empty()),
        }
    }
}
