use interfaces_github_contributors::index::{fetch_repo_contributors, GitHubRestResult};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::contributors::models::ContributorRecord;

#[derive(Debug, Error)]
pub enum FetchContributorsError {
    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },
}

/// Lists the repository's contributors.
///
/// Transport failures and any status other than 200 are logged and give
/// `Ok(None)`. A 200 whose body does not parse is an error.
pub async fn fetch_contributors(
    api_base: &str,
    token: Option<&str>,
    owner: &str,
    name: &str,
) -> Result<Option<Vec<ContributorRecord>>, FetchContributorsError> {
    let GitHubRestResult { body, status } =
        match fetch_repo_contributors(api_base, token, owner, name).await {
            Ok(result) => result,
            Err(source) => {
                error!(error = %source, "error fetching contributors");
                return Ok(None);
            }
        };

    if status != StatusCode::OK {
        error!(status = status.as_u16(), "received unexpected status code");
        return Ok(None);
    }

    let records: Vec<ContributorRecord> = serde_json::from_str(&body)?;

    Ok(Some(records))
}
