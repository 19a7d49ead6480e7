// WHY: Extractor owns the compiled pattern table and turns raw text into Findings
// Compile once, share immutably - analysis itself is pure and stateless

use anyhow::Result;
use tracing::{debug, info};

use crate::findings::{dedup_in_order, Findings, Platform, SocialMedia};

pub mod normalization;
pub mod patterns;

pub use normalization::{canonicalize, normalize_url};
pub use patterns::{social_patterns, Matcher, MatcherSet, PatternSpec};

/// Compiled matchers for every category
#[derive(Debug, Clone)]
pub struct Extractor {
    emails: Matcher,
    discord: Matcher,
    /// One matcher set per platform, indexed like `Platform::ALL`
    social: Vec<(Platform, MatcherSet)>,
}

impl Extractor {
    /// Compile the full pattern table
    pub fn new() -> Result<Self> {
        info!("Compiling contact extraction patterns");

        let emails = Matcher::compile(patterns::EMAIL)?;
        let discord = Matcher::compile(patterns::DISCORD)?;
        let social = Platform::ALL
            .into_iter()
            .map(|platform| -> Result<(Platform, MatcherSet)> {
                Ok((platform, MatcherSet::compile(social_patterns(platform))?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { emails, discord, social })
    }

    /// Run every matcher over `text` and collect deduplicated findings
    pub fn analyze(&self, text: &str) -> Findings {
        debug!("Analyzing {} bytes of text", text.len());

        let mut social_media = SocialMedia::default();
        for (platform, _) in &self.social {
            *social_media.links_mut(*platform) = self.extract_social(*platform, text);
        }

        let findings = Findings {
            emails: self.extract_emails(text),
            discord_handles: self.extract_discord_handles(text),
            social_media,
        };

        debug!(
            emails = findings.emails.len(),
            discord = findings.discord_handles.len(),
            total = findings.total(),
            "Analysis complete"
        );
        findings
    }

    /// Email addresses exactly as written
    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        dedup_in_order(self.emails.find_tokens(text))
    }

    /// Discord tags, invite/user links and bare handles pooled in one set
    pub fn extract_discord_handles(&self, text: &str) -> Vec<String> {
        dedup_in_order(self.discord.find_tokens(text))
    }

    /// Raw tokens for a platform before normalization, deduplicated
    pub fn raw_social_matches(&self, platform: Platform, text: &str) -> Vec<String> {
        match self.social.iter().find(|(p, _)| *p == platform) {
            Some((_, set)) => dedup_in_order(set.find_tokens(text)),
            None => Vec::new(),
        }
    }

    /// Normalized profile links for a platform
    /// WHY: dedup runs again after normalization since distinct raw forms can converge
    pub fn extract_social(&self, platform: Platform, text: &str) -> Vec<String> {
        let raw = self.raw_social_matches(platform, text);
        dedup_in_order(raw.iter().map(|token| canonicalize(platform, token)))
    }
}

/// Compile a fresh extractor and analyze `text` with it
///
/// # Example
/// ```
/// let findings = channel_analyzer::analyze("mail jane@example.com").unwrap();
/// assert_eq!(findings.emails, vec!["jane@example.com"]);
/// ```
pub fn analyze(text: &str) -> Result<Findings> {
    Ok(Extractor::new()?.analyze(text))
}
