//! Template fetcher implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::AppError;
use crate::ports::TemplateFetcher;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the static template repository.
#[derive(Clone, Debug)]
pub struct HttpTemplateFetcher {
    client: Client,
}

impl HttpTemplateFetcher {
    /// Create a new fetcher with a request timeout.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build().map_err(|e| {
            AppError::Validation(format!("Failed to create HTTP client: {e}"))
        })?;
        Ok(Self { client })
    }
}

impl TemplateFetcher for HttpTemplateFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Fetch { url: url.to_string(), details: e.to_string() })?;

        if !response.status().is_success() {
            return Err(AppError::Fetch {
                url: url.to_string(),
                details: format!("server returned {}", response.status()),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| AppError::Fetch { url: url.to_string(), details: e.to_string() })?;
        Ok(bytes.to_vec())
    }
}
