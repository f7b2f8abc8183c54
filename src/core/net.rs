// src/core/net.rs
// Blocking HTTPS fetches for pages and kit images.
//
// Callers see only `Option`: a failed fetch is logged here and becomes "absent",
// so one broken page never stops the crawl.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use crate::colour::PixelGrid;
use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Document fetch and image decode, as the extractors need them.
pub trait Fetch {
    /// Parsed page, or `None` on transport error or non-success status.
    fn page(&self, url: &Url) -> Option<Html>;

    /// Decoded raster, or `None` when it cannot be fetched or decoded.
    fn image(&self, url: &Url) -> Option<PixelGrid>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &Url) -> Result<reqwest::blocking::Response, FetchError> {
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
        }
        Ok(resp)
    }

    pub fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        Ok(self.get(url)?.text()?)
    }

    pub fn get_grid(&self, url: &Url) -> Result<PixelGrid, FetchError> {
        let bytes = self.get(url)?.bytes()?;
        let img = image::load_from_memory(&bytes)
            .map_err(|source| FetchError::Decode { url: url.to_string(), source })?;
        Ok(PixelGrid::from_rgba(&img.to_rgba8()))
    }
}

impl Fetch for HttpFetcher {
    fn page(&self, url: &Url) -> Option<Html> {
        match self.get_text(url) {
            Ok(body) => {
                logd!("GET {url} ({} bytes)", body.len());
                Some(super::html::parse(&body))
            }
            Err(e) => {
                loge!("GET {url}: {e}");
                None
            }
        }
    }

    fn image(&self, url: &Url) -> Option<PixelGrid> {
        match self.get_grid(url) {
            Ok(grid) => {
                logd!("IMG {url} ({}x{})", grid.width(), grid.height());
                Some(grid)
            }
            Err(e) => {
                loge!("IMG {url}: {e}");
                None
            }
        }
    }
}

/// Resolve `href` against the page it was found on. Absolute links pass through;
/// scheme-relative ones (`//host/path`) inherit the page's scheme.
pub fn resolve(base: &Url, href: &str) -> Result<Url, FetchError> {
    base.join(href.trim())
        .map_err(|e| FetchError::InvalidUrl(format!("{href} (against {base}): {e}")))
}
