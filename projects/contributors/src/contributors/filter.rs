use tracing::debug;

use crate::bots::is_bot;
use crate::contributors::models::{Contributor, ContributorRecord};

/// Drops bot accounts and reduces the rest to the published fields.
///
/// Source order is preserved.
pub fn filter_and_simplify(records: Vec<ContributorRecord>) -> Vec<Contributor> {
    records
        .into_iter()
        .filter(|record| {
            let bot = is_bot(&record.login);
            if bot {
                debug!(login = %record.login, contributions = ?record.contributions, "skipping bot account");
            }
            !bot
        })
        .map(Contributor::from)
        .collect()
}
