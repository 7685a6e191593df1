//! HTTP retrieval of agent metrics documents

use reqwest::blocking::Client;

use crate::metrics::MetricsDocument;
use crate::utils::FetchError;

/// Fetches and decodes one metrics document per call
///
/// Cloning is cheap; the underlying HTTP client is shared.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GET a metrics endpoint and decode its JSON body
    ///
    /// Every failure kind is a per-server value for the caller to report;
    /// none of them aborts the process.
    pub fn fetch(&self, url: &str) -> Result<MetricsDocument, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        MetricsDocument::from_json(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
