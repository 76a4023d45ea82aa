use serde::{Deserialize, Serialize};

/// One entry of the GitHub contributors response.
///
/// Only the fields used downstream are parsed; the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributorRecord {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: Option<u64>,
}

/// What the documentation site consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

impl From<ContributorRecord> for Contributor {
    fn from(record: ContributorRecord) -> Self {
        Self {
            login: record.login,
            avatar_url: record.avatar_url,
            html_url: record.html_url,
        }
    }
}
