// src/core/net.rs

// Blocking HTTPS GET (the upstream database is HTTPS-only).

use std::time::Duration;

use crate::config::consts::{HOST, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

fn client() -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// Fetch `https://HOST<path>` and return the body as text.
/// Non-2xx statuses and transport failures both surface as `Fetch`.
pub fn http_get(path: &str) -> Result<String, ScrapeError> {
    let url = format!("https://{}{}", HOST, path);

    let response = client()
        .and_then(|c| c.get(&url).send())
        .and_then(|r| r.error_for_status())
        .map_err(|source| {
            loge!("Net: GET {} failed: {}", url, source);
            ScrapeError::Fetch { url: url.clone(), source }
        })?;

    response
        .text()
        .map_err(|source| ScrapeError::Fetch { url, source })
}
