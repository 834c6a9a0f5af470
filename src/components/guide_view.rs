//! Platform catalog and signup guide rendering.

use std::fmt::Write as _;

use crate::net::types::{Guide, PlatformSummary};

/// Catalog list; the selected platform is marked with `>`.
#[must_use]
pub fn render_catalog(platforms: &[PlatformSummary], selected: Option<&str>) -> String {
    let mut out = String::new();
    for platform in platforms {
        let marker = if selected == Some(platform.platform_id.as_str()) { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {} {:<20} {:<18} {}",
            platform.icon, platform.platform_id, platform.platform_name, platform.description
        );
    }
    out
}

#[must_use]
pub fn render_guide(guide: &Guide) -> String {
    let mut out = format!("{} {}\n", guide.icon, guide.platform_name);
    if !guide.description.is_empty() {
        let _ = writeln!(out, "{}", guide.description);
    }
    let _ = writeln!(out, "Sign up: {}", guide.signup_url);
    if !guide.api_docs_url.is_empty() {
        let _ = writeln!(out, "API docs: {}", guide.api_docs_url);
    }

    out.push_str("\nSteps\n");
    for step in &guide.steps {
        let _ = writeln!(out, "  {}. {}", step.step, step.title);
        let _ = writeln!(out, "     {}", step.description);
        for tip in &step.tips {
            let _ = writeln!(out, "     - {tip}");
        }
    }

    if !guide.platform_tips.is_empty() {
        out.push_str("\nTips\n");
        for tip in &guide.platform_tips {
            let _ = writeln!(out, "  * {tip}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers;

    #[test]
    fn catalog_marks_selected_platform() {
        let platforms = vec![test_helpers::platform("openai_free"), test_helpers::platform("gemini_free")];
        let out = render_catalog(&platforms, Some("gemini_free"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(' '));
        assert!(lines[1].starts_with('>'));
    }

    #[test]
    fn guide_omits_tips_section_when_empty() {
        let mut guide = test_helpers::guide("gemini_free");
        guide.platform_tips.clear();
        guide.api_docs_url.clear();
        let out = render_guide(&guide);
        assert!(out.contains("Steps"));
        assert!(!out.contains("Tips"));
        assert!(!out.contains("API docs"));
    }
}
