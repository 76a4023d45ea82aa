use thiserror::Error;
use tracing::{error, info};

use crate::config::FetcherConfig;
use crate::contributors::fetch::{fetch_contributors, FetchContributorsError};
use crate::contributors::filter::filter_and_simplify;
use crate::output::{write_contributors, WriteContributorsError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("FetchContributors: {source}")]
    FetchContributors {
        #[from]
        source: FetchContributorsError,
    },

    #[error("WriteContributors: {source}")]
    WriteContributors {
        #[from]
        source: WriteContributorsError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Saved { count: usize },
    NoData,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Saved { .. } => 0,
            RunOutcome::NoData => 1,
        }
    }
}

/// Fetch, filter, write.
pub async fn run(config: &FetcherConfig) -> Result<RunOutcome, RunError> {
    info!(owner = %config.owner, name = %config.name, "fetching contributors from GitHub");

    let Some(records) = fetch_contributors(
        &config.api_base,
        config.token.as_deref(),
        &config.owner,
        &config.name,
    )
    .await?
    else {
        error!("failed to fetch contributors");
        return Ok(RunOutcome::NoData);
    };

    let contributors = filter_and_simplify(records);
    info!(count = contributors.len(), "found human contributors");

    write_contributors(&config.output_path, &contributors).await?;
    info!(path = %config.output_path.display(), "contributors saved");

    Ok(RunOutcome::Saved { count: contributors.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contributors::models::Contributor;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, dir: &tempfile::TempDir, token: Option<&str>) -> FetcherConfig {
        let mut config = FetcherConfig::with_token(token.map(str::to_string));
        config.api_base = server.uri();
        config.output_path = dir.path().join("docs/assets/contributors.json");
        config
    }

    #[tokio::test]
    async fn writes_human_contributors() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/truefoundry/KubeElasti/contributors"))
            .and(header("Authorization", "token ghp_test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"login":"alice","avatar_url":"a","html_url":"u1"},{"login":"dependabot[bot]","avatar_url":"b","html_url":"u2"}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;
        let config = config_for(&server, &dir, Some("ghp_test"));

        let outcome = run(&config).await?;

        assert_eq!(outcome, RunOutcome::Saved { count: 1 });
        assert_eq!(outcome.exit_code(), 0);
        let written: Vec<Contributor> = serde_json::from_slice(&std::fs::read(&config.output_path)?)?;
        assert_eq!(
            written,
            vec![Contributor {
                login: "alice".into(),
                avatar_url: "a".into(),
                html_url: "u1".into(),
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn empty_response_writes_empty_array() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;
        let config = config_for(&server, &dir, None);

        let outcome = run(&config).await?;

        assert_eq!(outcome, RunOutcome::Saved { count: 0 });
        assert_eq!(std::fs::read_to_string(&config.output_path)?, "[]");
        Ok(())
    }

    #[tokio::test]
    async fn error_status_exits_one_without_writing() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;
        let config = config_for(&server, &dir, None);

        let outcome = run(&config).await?;

        assert_eq!(outcome, RunOutcome::NoData);
        assert_eq!(outcome.exit_code(), 1);
        assert!(!config.output_path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_api_exits_one() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut config = FetcherConfig::with_token(None);
        config.api_base = "http://127.0.0.1:1".to_string();
        config.output_path = dir.path().join("contributors.json");

        assert_eq!(run(&config).await?.exit_code(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"login":"alice"}]"#))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;
        let config = config_for(&server, &dir, None);

        let err = run(&config).await.unwrap_err();

        assert!(matches!(err, RunError::FetchContributors { .. }));
        Ok(())
    }
}
