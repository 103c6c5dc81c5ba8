use crate::error::MonitorError;
use reqwest::header::{HeaderName, ACCEPT_LANGUAGE, USER_AGENT};
use tracing::debug;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Which headers go out with a GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestProfile {
    /// No extra headers.
    Plain,
    /// Browser `User-Agent`, used for file downloads.
    Browser,
    /// Browser `User-Agent` and `Accept-Language`, used for html pages.
    BrowserPage,
}

impl RequestProfile {
    pub fn headers(self) -> Vec<(HeaderName, &'static str)> {
        match self {
            RequestProfile::Plain => vec![],
            RequestProfile::Browser => vec![(USER_AGENT, BROWSER_USER_AGENT)],
            RequestProfile::BrowserPage => vec![
                (USER_AGENT, BROWSER_USER_AGENT),
                (ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE),
            ],
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_text(&self, url: &str, profile: RequestProfile) -> Result<String, MonitorError>;
    async fn get_bytes(&self, url: &str, profile: RequestProfile)
        -> Result<Vec<u8>, MonitorError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn send(
        &self,
        url: &str,
        profile: RequestProfile,
    ) -> Result<reqwest::Response, MonitorError> {
        let mut request = self.client.get(url);
        for (name, value) in profile.headers() {
            request = request.header(name, value);
        }

        debug!("Visit {} ({:?})", url, profile);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn get_text(&self, url: &str, profile: RequestProfile) -> Result<String, MonitorError> {
        Ok(self.send(url, profile).await?.text().await?)
    }

    async fn get_bytes(
        &self,
        url: &str,
        profile: RequestProfile,
    ) -> Result<Vec<u8>, MonitorError> {
        let bytes = self.send(url, profile).await?.bytes().await?;
        debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
