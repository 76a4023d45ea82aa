use reqwest::{Client, StatusCode};
use thiserror::Error;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

/// `GET {api_base}/repos/{owner}/{name}/contributors`
///
/// Returns the raw body and status; interpreting either is left to the caller.
/// `token` is sent as `Authorization: token <value>` when present.
pub async fn fetch_repo_contributors(
    api_base: &str,
    token: Option<&str>,
    owner: &str,
    name: &str,
) -> Result<GitHubRestResult, FetchRepoContributorsError> {
    let url = format!(
        "{}/repos/{owner}/{name}/contributors",
        api_base.trim_end_matches('/')
    );

    let client = Client::new();

    let mut request = client
        .get(&url)
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", "rust-client");

    if let Some(token) = token {
        request = request.header("Authorization", format!("token {token}"));
    }

    let response = request
        .send()
        .await
        .map_err(|source| FetchRepoContributorsError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchRepoContributorsError::ResponseRead { source })?;

    Ok(GitHubRestResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchRepoContributorsError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
