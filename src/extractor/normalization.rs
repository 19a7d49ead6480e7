// WHY: Standalone URL canonicalization so matching and normalization are testable separately
// Failures never escape - a bad match degrades to its https-prefixed text

use std::borrow::Cow;
use tracing::warn;
use url::Url;

use crate::findings::Platform;

/// Host that keeps its bare form instead of gaining `www.`
pub const SHORT_VIDEO_HOST: &str = "youtu.be";

/// Canonicalize a social media reference into `https://www.<host>/...`
///
/// Prepends `https://` when no scheme is present, then adds `www.` to the host unless it
/// already has one or is the `youtu.be` short domain. If the text cannot be parsed as a URL
/// the scheme-prefixed text is returned unchanged.
pub fn normalize_url(raw: &str) -> String {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let mut url = match Url::parse(&with_scheme) {
        Ok(url) => url,
        Err(e) => {
            warn!("Keeping unparsed link {}: {}", with_scheme, e);
            return with_scheme;
        }
    };

    let host = match url.host_str() {
        Some(host) => host.to_string(),
        None => return with_scheme,
    };

    if !host.starts_with("www.") && host != SHORT_VIDEO_HOST {
        if let Err(e) = url.set_host(Some(&format!("www.{host}"))) {
            warn!("Keeping link without www prefix {}: {}", with_scheme, e);
            return with_scheme;
        }
    }

    url.to_string()
}

/// Turn a bare twitter `@handle` into the profile path it refers to
/// WHY: lets `@jdoe` and `twitter.com/jdoe` collapse into one normalized link
pub fn expand_bare_handle(platform: Platform, raw: &str) -> Cow<'_, str> {
    match (platform, raw.strip_prefix('@')) {
        (Platform::Twitter, Some(handle)) => Cow::Owned(format!("twitter.com/{handle}")),
        _ => Cow::Borrowed(raw),
    }
}

/// Full normalization for a raw token found by a platform's matchers
pub fn canonicalize(platform: Platform, raw: &str) -> String {
    normalize_url(&expand_bare_handle(platform, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme_and_www() {
        assert_eq!(
            normalize_url("youtube.com/channel/xyz"),
            "https://www.youtube.com/channel/xyz"
        );
    }

    #[test]
    fn test_normalize_short_video_host_stays_bare() {
        assert_eq!(normalize_url("youtu.be/xyz"), "https://youtu.be/xyz");
        assert_eq!(normalize_url("http://youtu.be/xyz"), "http://youtu.be/xyz");
    }

    #[test]
    fn test_normalize_keeps_existing_www_and_scheme() {
        assert_eq!(
            normalize_url("http://www.github.com/rust-lang"),
            "http://www.github.com/rust-lang"
        );
        assert_eq!(
            normalize_url("www.instagram.com/some.one"),
            "https://www.instagram.com/some.one"
        );
    }

    #[test]
    fn test_normalize_lowercases_host_only() {
        assert_eq!(
            normalize_url("https://GitHub.com/SomeUser"),
            "https://www.github.com/SomeUser"
        );
    }

    #[test]
    fn test_normalize_tiktok_path_with_at() {
        assert_eq!(
            normalize_url("tiktok.com/@dance.star"),
            "https://www.tiktok.com/@dance.star"
        );
    }

    #[test]
    fn test_normalize_falls_back_on_parse_failure() {
        assert_eq!(normalize_url("[not a host/path"), "https://[not a host/path");
        assert_eq!(normalize_url("http://[bad"), "http://[bad");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "twitter.com/jdoe",
            "youtu.be/abc",
            "linkedin.com/company/acme",
            "https://www.facebook.com/page.name",
        ] {
            let once = normalize_url(raw);
            assert_eq!(normalize_url(&once), once);
        }
    }

    #[test]
    fn test_expand_bare_handle_only_for_twitter() {
        assert_eq!(expand_bare_handle(Platform::Twitter, "@jdoe"), "twitter.com/jdoe");
        assert_eq!(expand_bare_handle(Platform::Twitter, "x.com/jdoe"), "x.com/jdoe");
        assert_eq!(expand_bare_handle(Platform::Github, "@jdoe"), "@jdoe");
    }

    #[test]
    fn test_canonicalize_bare_handle() {
        assert_eq!(canonicalize(Platform::Twitter, "@jdoe"), "https://www.twitter.com/jdoe");
        assert_eq!(
            canonicalize(Platform::Twitter, "twitter.com/jdoe"),
            "https://www.twitter.com/jdoe"
        );
    }
}
