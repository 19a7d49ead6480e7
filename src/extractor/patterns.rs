// WHY: Explicit pattern table so each matcher can be compiled and tested in isolation
// Uses the regex-automata meta engine for linear-time matching on adversarial input

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use tracing::debug;

use crate::findings::Platform;

/// Capture group holding the reported token when a pattern consumes trailing context
/// WHY: the meta engine has no lookahead, so "followed by whitespace or end" is matched
/// outside this group and dropped from the token
pub const TOKEN_GROUP: &str = "tok";

/// Named regex source for a single matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpec {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// `local@domain.tld`, TLD at least two letters
/// WHY: ASCII word boundaries, so an address touching accented or CJK letters still matches
pub const EMAIL: PatternSpec = PatternSpec {
    name: "email",
    pattern: r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)",
};

/// Legacy `name#1234` tags, invite/user links, then bare `@handle`
/// WHY: alternation order is significant - a tag wins over a bare handle at the same start
pub const DISCORD: PatternSpec = PatternSpec {
    name: "discord",
    pattern: concat!(
        r"@?[A-Za-z0-9_]{2,32}#[0-9]{4}",
        r"|discord\.gg/[A-Za-z0-9]+",
        r"|discordapp\.com/(?:invite|users)/[A-Za-z0-9]+",
        r"|(?P<tok>@[A-Za-z0-9_]{2,32})(?:\s|$)",
    ),
};

pub const TWITTER_URL: PatternSpec = PatternSpec {
    name: "twitter_url",
    pattern: r"(?:https?://)?(?:www\.)?(?:twitter\.com|x\.com)/[A-Za-z0-9_]+",
};

pub const TWITTER_HANDLE: PatternSpec = PatternSpec {
    name: "twitter_handle",
    pattern: r"(?P<tok>@[A-Za-z0-9_]{1,15})(?:\s|$)",
};

pub const FACEBOOK_URL: PatternSpec = PatternSpec {
    name: "facebook_url",
    pattern: r"(?:https?://)?(?:www\.)?facebook\.com/[A-Za-z0-9.]+",
};

pub const FACEBOOK_SHORT_URL: PatternSpec = PatternSpec {
    name: "facebook_short_url",
    pattern: r"(?:https?://)?(?:www\.)?fb\.com/[A-Za-z0-9.]+",
};

pub const INSTAGRAM_URL: PatternSpec = PatternSpec {
    name: "instagram_url",
    pattern: r"(?:https?://)?(?:www\.)?instagram\.com/[A-Za-z0-9._]+",
};

pub const LINKEDIN_URL: PatternSpec = PatternSpec {
    name: "linkedin_url",
    pattern: r"(?:https?://)?(?:www\.)?linkedin\.com/(?:in|company)/[A-Za-z0-9-]+",
};

pub const YOUTUBE_URL: PatternSpec = PatternSpec {
    name: "youtube_url",
    pattern: r"(?:https?://)?(?:www\.)?youtube\.com/(?:c/|channel/|user/|@)?[A-Za-z0-9_-]+",
};

pub const YOUTUBE_SHORT_URL: PatternSpec = PatternSpec {
    name: "youtube_short_url",
    pattern: r"(?:https?://)?(?:www\.)?youtu\.be/[A-Za-z0-9_-]+",
};

pub const TIKTOK_URL: PatternSpec = PatternSpec {
    name: "tiktok_url",
    pattern: r"(?:https?://)?(?:www\.)?tiktok\.com/@[A-Za-z0-9._]+",
};

pub const GITHUB_URL: PatternSpec = PatternSpec {
    name: "github_url",
    pattern: r"(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_-]+",
};

/// Ordered patterns tried for a platform; results are pooled in this order
pub fn social_patterns(platform: Platform) -> &'static [PatternSpec] {
    match platform {
        Platform::Twitter => &[TWITTER_URL, TWITTER_HANDLE],
        Platform::Facebook => &[FACEBOOK_URL, FACEBOOK_SHORT_URL],
        Platform::Instagram => &[INSTAGRAM_URL],
        Platform::Linkedin => &[LINKEDIN_URL],
        Platform::Youtube => &[YOUTUBE_URL, YOUTUBE_SHORT_URL],
        Platform::Tiktok => &[TIKTOK_URL],
        Platform::Github => &[GITHUB_URL],
    }
}

/// A compiled pattern from the table
#[derive(Debug, Clone)]
pub struct Matcher {
    spec: PatternSpec,
    regex: Regex,
}

impl Matcher {
    pub fn compile(spec: PatternSpec) -> Result<Self> {
        let regex = Regex::new(spec.pattern)
            .with_context(|| format!("Failed to compile pattern '{}'", spec.name))?;
        debug!("Compiled pattern {}: {}", spec.name, spec.pattern);
        Ok(Self { spec, regex })
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// All non-overlapping tokens in order of appearance, duplicates included
    pub fn find_tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                caps.get_group_by_name(TOKEN_GROUP)
                    .or_else(|| caps.get_match().map(|m| m.span()))
            })
            .map(|span| &text[span.range()])
            .collect()
    }
}

/// Ordered list of matchers whose tokens are pooled into one category
#[derive(Debug, Clone)]
pub struct MatcherSet {
    matchers: Vec<Matcher>,
}

impl MatcherSet {
    pub fn compile(specs: &[PatternSpec]) -> Result<Self> {
        let matchers = specs
            .iter()
            .map(|spec| Matcher::compile(*spec))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    /// Tokens of every matcher, matcher order first then text order
    pub fn find_tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.matchers
            .iter()
            .flat_map(|matcher| matcher.find_tokens(text))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(Matcher::name)
    }
}
