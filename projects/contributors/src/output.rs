use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::contributors::models::Contributor;

#[derive(Debug, Error)]
pub enum WriteContributorsError {
    #[error("SerializeContributors: {source}")]
    SerializeContributors {
        #[from]
        source: serde_json::Error,
    },

    #[error("CreateOutputDir: {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("WriteOutputFile: {}: {source}", path.display())]
    WriteOutputFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Replaces `path` with a compact JSON array of `contributors`,
/// creating the parent directory if needed.
pub async fn write_contributors(
    path: &Path,
    contributors: &[Contributor],
) -> Result<(), WriteContributorsError> {
    let json = serde_json::to_vec(contributors)?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| WriteContributorsError::CreateOutputDir {
                path: dir.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, json)
        .await
        .map_err(|source| WriteContributorsError::WriteOutputFile {
            path: path.to_path_buf(),
            source,
        })
}
