use std::path::PathBuf;

use interfaces_github_contributors::index::GITHUB_API_BASE;

pub const REPO_OWNER: &str = "truefoundry";
pub const REPO_NAME: &str = "KubeElasti";
pub const OUTPUT_PATH: &str = "docs/assets/contributors.json";
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Everything one fetch run needs.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub api_base: String,
    pub owner: String,
    pub name: String,
    pub token: Option<String>,
    pub output_path: PathBuf,
}

impl FetcherConfig {
    /// Fixed repository and output path, token from the environment.
    ///
    /// Loads `.env` first if one exists. An empty token counts as unset.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let token = std::env::var(GITHUB_TOKEN_VAR).ok();
        Self::with_token(token)
    }

    pub fn with_token(token: Option<String>) -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            owner: REPO_OWNER.to_string(),
            name: REPO_NAME.to_string(),
            token: token.filter(|value| !value.trim().is_empty()),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}
