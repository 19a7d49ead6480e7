// WHY: Plain-text presenter for the CLI, mirroring the grouping used by the browser page

use crate::findings::Findings;

/// Placeholder printed for a category with no results
pub const NONE_FOUND: &str = "None found";

/// Render findings as labeled lists, one section per category
pub fn render_text(findings: &Findings) -> String {
    let mut out = String::new();

    write_section(&mut out, "Emails", &findings.emails, 0);
    write_section(&mut out, "Discord", &findings.discord_handles, 0);

    out.push_str("Social Media\n");
    for (platform, links) in findings.social_media.iter() {
        write_section(&mut out, platform.label(), links, 2);
    }

    out
}

fn write_section(out: &mut String, label: &str, items: &[String], indent: usize) {
    let pad = " ".repeat(indent);
    out.push_str(&format!("{pad}{label} ({})\n", items.len()));
    if items.is_empty() {
        out.push_str(&format!("{pad}  {NONE_FOUND}\n"));
    }
    for item in items {
        out.push_str(&format!("{pad}  - {item}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::Platform;

    #[test]
    fn test_render_empty_findings() {
        let text = render_text(&Findings::default());
        assert!(text.starts_with("Emails (0)\n  None found\n"));
        assert!(text.contains("Discord (0)\n  None found\n"));
        // Two top-level categories plus every platform
        assert_eq!(text.matches(NONE_FOUND).count(), 2 + Platform::ALL.len());
    }

    #[test]
    fn test_render_lists_items_under_labels() {
        let mut findings = Findings::default();
        findings.emails.push("jane@example.com".to_string());
        findings
            .social_media
            .links_mut(Platform::Youtube)
            .push("https://youtu.be/xyz".to_string());

        let text = render_text(&findings);
        assert!(text.contains("Emails (1)\n  - jane@example.com\n"));
        assert!(text.contains("  YouTube (1)\n    - https://youtu.be/xyz\n"));
        assert!(text.contains("  GitHub (0)\n    None found\n"));
    }
}
