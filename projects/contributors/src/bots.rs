/// How a pattern is anchored against a username.
#[derive(Debug, Clone, Copy)]
enum BotPattern {
    Prefix(&'static str),
    Suffix(&'static str),
}

impl BotPattern {
    fn matches(self, lowercase_username: &str) -> bool {
        match self {
            BotPattern::Prefix(prefix) => lowercase_username.starts_with(prefix),
            BotPattern::Suffix(suffix) => lowercase_username.ends_with(suffix),
        }
    }
}

// Lowercase; usernames are lowered before matching.
const BOT_PATTERNS: &[BotPattern] = &[
    BotPattern::Suffix("-bot"),
    BotPattern::Suffix("-automation"),
    BotPattern::Suffix("[bot]"),
    BotPattern::Prefix("dependabot"),
    BotPattern::Prefix("renovate"),
    BotPattern::Prefix("github-actions"),
    BotPattern::Prefix("semantic-release"),
    BotPattern::Prefix("imgbot"),
    BotPattern::Prefix("codecov"),
    BotPattern::Prefix("snyk"),
    BotPattern::Prefix("greenkeeper"),
    BotPattern::Prefix("depfu"),
    BotPattern::Prefix("pyup-bot"),
];

/// True when `username` matches any known bot pattern, ignoring case.
pub fn is_bot(username: &str) -> bool {
    let lowered = username.to_lowercase();
    BOT_PATTERNS.iter().any(|pattern| pattern.matches(&lowered))
}
