//! HTTP client for fetching public profile pages.

use std::time::Duration;

use url::Url;

use crate::types::ProfileRecord;
use crate::{extract, normalize, spoof, Error};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the public profile pages.
///
/// Sends browser-like headers plus a freshly randomized forwarded IP on
/// every request. One attempt per invocation, no retries, 10-second
/// timeout.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production site.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://www.tiktok.com")
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn profile_url(&self, handle: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}/@{}", self.base_url, handle))?)
    }

    /// Fetches the raw HTML of a profile page.
    ///
    /// A status above 400 surfaces as [`Error::HttpStatus`], which callers
    /// report as "not found / forbidden" distinct from transport failures.
    pub async fn fetch_profile_page(&self, handle: &str) -> Result<String, Error> {
        let url = self.profile_url(handle)?;
        let ip = spoof::random_ipv4();
        let resp = self
            .http
            .get(url)
            .header("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("accept-language", "en-US,en;q=0.9")
            .header("dnt", "1")
            .header("upgrade-insecure-requests", "1")
            .header("sec-fetch-dest", "document")
            .header("sec-fetch-mode", "navigate")
            .header("sec-fetch-site", "none")
            .header("cache-control", "max-age=0")
            .header("x-forwarded-for", &ip)
            .header("x-real-ip", &ip)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("profile page for {} returned status {}", handle, status);
            return Err(Error::HttpStatus { status });
        }

        Ok(resp.text().await?)
    }

    /// Fetches a binary resource, e.g. an avatar image.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::error!("download of {} returned status {}", url, status);
            return Err(Error::HttpStatus { status });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    /// Runs the whole pipeline for one handle: fetch, extract, normalize.
    pub async fn stalk(&self, handle: &str) -> Result<ProfileRecord, Error> {
        let html = self.fetch_profile_page(handle).await?;
        let info = extract::extract_user_info(&html)?;
        Ok(normalize::normalize(info))
    }
}
