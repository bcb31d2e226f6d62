use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::error::Result;

/// Timeout applied to each reachability check.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Single-shot HEAD checker used to flag URLs in `show` output.
///
/// Redirects are not followed, so only a direct `200 OK` counts as
/// reachable. No retries.
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("imgr/", env!("CARGO_PKG_VERSION"))),
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// `true` only if a HEAD request to `url` answers exactly `200 OK`.
    ///
    /// Network errors, timeouts and every other status (3xx included) give
    /// `false`.
    pub fn probe(&self, url: &str) -> bool {
        match self.client.head(url).send() {
            Ok(resp) => {
                let ok = resp.status() == StatusCode::OK;
                log::debug!("HEAD {} -> {}", url, resp.status());
                ok
            }
            Err(e) => {
                log::debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }
}
