//! reqwest-backed GitHub REST client.
//!
//! One `reqwest::Client` is built at startup and shared by all requests; it owns
//! the connection pool, the timeout and the User-Agent (GitHub rejects calls
//! without one). Authorization is attached per call from the configured token.

use async_trait::async_trait;
use reqwest::{header, Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::GitHubError;
use crate::github::GitHubApi;
use crate::models::{ContentPayload, RepositoryReference, TreeEntry, TreeResponse};

pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

/// Error body GitHub sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| GitHubError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GitHubError::InvalidUrl(config.api_url.clone()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, GitHubError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, token: &str) -> Result<T, GitHubError> {
        debug!(%url, "GitHub API request");

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("token {}", token))
            .header(header::ACCEPT, ACCEPT_HEADER)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Err(GitHubError::Status { status, message })
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_tree(
        &self,
        repo: &RepositoryReference,
        token: &str,
    ) -> Result<Vec<TreeEntry>, GitHubError> {
        let mut url = self.endpoint([
            "repos",
            repo.owner.as_str(),
            repo.name.as_str(),
            "git",
            "trees",
            repo.branch.as_str(),
        ])?;
        url.set_query(Some("recursive=1"));

        let response: TreeResponse = self.get_json(url, token).await?;
        if response.truncated {
            warn!(repository = %repo, "GitHub truncated the tree listing");
        }
        Ok(response.tree)
    }

    async fn get_content(
        &self,
        repo: &RepositoryReference,
        path: &str,
        token: &str,
    ) -> Result<ContentPayload, GitHubError> {
        let segments = ["repos", repo.owner.as_str(), repo.name.as_str(), "contents"]
            .into_iter()
            .chain(path.split('/'));
        let url = self.endpoint(segments)?;

        self.get_json(url, token).await
    }
}
