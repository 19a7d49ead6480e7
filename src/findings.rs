// WHY: Single result shape shared by the extractor, the HTTP boundary and the text presenter
// Field names on the wire follow the JSON contract consumed by the browser page

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Social platforms recognized by the extractor, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
    Youtube,
    Tiktok,
    Github,
}

impl Platform {
    /// Every platform in the fixed order used for matching and output
    pub const ALL: [Platform; 7] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Github,
    ];

    /// Key used in the `socialMedia` JSON object
    pub fn key(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Github => "github",
        }
    }

    /// Human readable name for presenters
    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter/X",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Github => "GitHub",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Normalized profile links grouped per platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub twitter: Vec<String>,
    pub facebook: Vec<String>,
    pub instagram: Vec<String>,
    pub linkedin: Vec<String>,
    pub youtube: Vec<String>,
    pub tiktok: Vec<String>,
    pub github: Vec<String>,
}

impl SocialMedia {
    pub fn links(&self, platform: Platform) -> &[String] {
        match platform {
            Platform::Twitter => &self.twitter,
            Platform::Facebook => &self.facebook,
            Platform::Instagram => &self.instagram,
            Platform::Linkedin => &self.linkedin,
            Platform::Youtube => &self.youtube,
            Platform::Tiktok => &self.tiktok,
            Platform::Github => &self.github,
        }
    }

    pub fn links_mut(&mut self, platform: Platform) -> &mut Vec<String> {
        match platform {
            Platform::Twitter => &mut self.twitter,
            Platform::Facebook => &mut self.facebook,
            Platform::Instagram => &mut self.instagram,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Youtube => &mut self.youtube,
            Platform::Tiktok => &mut self.tiktok,
            Platform::Github => &mut self.github,
        }
    }

    /// Iterate platforms with their links in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &[String])> + '_ {
        Platform::ALL.into_iter().map(move |p| (p, self.links(p)))
    }
}

/// Structured result of one analysis
/// WHY: every list is an ordered set - unique values in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    pub emails: Vec<String>,
    #[serde(rename = "discord")]
    pub discord_handles: Vec<String>,
    #[serde(rename = "socialMedia")]
    pub social_media: SocialMedia,
}

impl Findings {
    /// Total number of identifiers across every category
    pub fn total(&self) -> usize {
        self.emails.len()
            + self.discord_handles.len()
            + self.social_media.iter().map(|(_, links)| links.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Collect values keeping only the first occurrence of each, preserving order
pub fn dedup_in_order<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for value in values {
        let value = value.into();
        if seen.insert(value.clone()) {
            unique.push(value);
        }
    }
    unique
}
