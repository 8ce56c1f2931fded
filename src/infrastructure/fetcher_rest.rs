use anyhow::Context;
use log::{debug, error, info};
use reqwest::{Client, header::ACCEPT};
use thiserror::Error;

use crate::{RepositoriesRequest, RepositoryFetcher, Response, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Parse error
    #[error("Parsing error: {0}")]
    Parse(String),
    /// Remote error
    #[error("Remote error: {0}")]
    Remote(String),
}

impl From<reqwest::Error> for FetcherError {
    fn from(error: reqwest::Error) -> Self {
        FetcherError::Remote(error.to_string())
    }
}

/// Fetches the repositories of a user from the GitHub REST API.
pub struct RestFetcher {
    client: Client,
    endpoint: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance targeting the given API endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, request: &RepositoriesRequest) -> String {
        format!("{}/{}", self.endpoint, request.path())
    }

    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>, FetcherError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetcherError::Remote(format!(
                "Request to {url} failed with status {status}: {message}"
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self, request: &RepositoriesRequest) -> StdResult<Response> {
        let url = self.url(request);
        debug!("Fetching {url}");
        let body = self.fetch_body(&url).await?;
        let response = serde_json::from_slice::<Response>(&body).map_err(|e| {
            error!("Failed to parse REST response: {}", e);
            FetcherError::Parse(e.to_string())
        })?;
        info!(
            "Fetched {} repositories for user {}",
            response.repositories().len(),
            request.username()
        );

        Ok(response)
    }
}
