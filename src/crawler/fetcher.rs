//! HTTP fetcher implementation
//!
//! One shared client is built per run and explicitly passed to every fetch.
//! A fetch either returns the decoded body or a typed fatal error; there is
//! no retry and no per-page recovery.

use crate::config::FetchConfig;
use crate::SiftError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by a whole run
///
/// The per-request timeout covers the entire request, from connect to the
/// last body byte.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and returns the body decoded as text
///
/// # Failure modes
///
/// * Timeout → [`SiftError::Timeout`]
/// * Other transport errors → [`SiftError::Http`]
/// * Non-success status → [`SiftError::HttpStatus`]
///
/// All of them abort the run; the orchestrator never catches a fetch error.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, SiftError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SiftError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> SiftError {
    if error.is_timeout() {
        SiftError::Timeout {
            url: url.to_string(),
        }
    } else {
        SiftError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
