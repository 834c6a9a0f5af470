//! Quota card for one connected platform.
//!
//! Pure rendering: urgency and usage figures come from the backend and are
//! only bucketed here for display.

#[cfg(test)]
#[path = "quota_card_test.rs"]
mod quota_card_test;

use std::fmt::Write as _;

use crate::net::types::{PlatformQuota, QuotaInfo};

const BAR_WIDTH: usize = 20;

/// Icon shown next to a platform name.
#[must_use]
pub fn platform_icon(platform_id: &str) -> &'static str {
    match platform_id {
        "openai_free" => "🤖",
        "gemini_free" => "💎",
        "claude_free" => "🧠",
        "leonardo_free" => "🎨",
        "huggingface_free" => "🤗",
        _ => "🔷",
    }
}

/// Badge color band for a platform's urgency score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrgencyBand {
    High,
    Medium,
    Low,
}

impl UrgencyBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            Self::High
        } else if score > 30.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Bar color band for a single quota's usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageBand {
    Critical,
    Warning,
    Ok,
}

impl UsageBand {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 90.0 {
            Self::Critical
        } else if percentage > 70.0 {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    #[must_use]
    pub fn marker(self) -> char {
        match self {
            Self::Critical => '!',
            Self::Warning => '+',
            Self::Ok => '#',
        }
    }
}

/// Fixed-width usage bar; the fill is clamped to `0..=100` percent.
#[must_use]
pub fn usage_bar(percentage: f64, width: usize) -> String {
    let clamped = if percentage.is_nan() { 0.0 } else { percentage.clamp(0.0, 100.0) };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let marker = UsageBand::from_percentage(percentage).marker();
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n(marker, filled.min(width)));
    bar.extend(std::iter::repeat_n('.', width.saturating_sub(filled)));
    bar.push(']');
    bar
}

/// One quota line: `type  used/total  [bar]  pct%`.
#[must_use]
pub fn render_quota_line(quota: &QuotaInfo) -> String {
    format!(
        "{:<24} {:>6}/{:<6} {} {:>5.1}%",
        quota.quota_type,
        format!("{:.0}", quota.used_quota.round()),
        format!("{:.0}", quota.total_quota.round()),
        usage_bar(quota.usage_percentage, BAR_WIDTH),
        quota.usage_percentage,
    )
}

#[must_use]
pub fn render_quota_card(platform: &PlatformQuota) -> String {
    let band = UrgencyBand::from_score(platform.urgency_score);
    let mut out = format!(
        "{} {}  [{} · {} urgency]\n",
        platform_icon(&platform.platform_id),
        platform.platform_name,
        platform.recommendation,
        band.label(),
    );
    if let Some(reset) = platform.time_until_reset.as_deref() {
        let _ = writeln!(out, "  resets in {reset}");
    }
    for quota in &platform.quotas {
        let _ = writeln!(out, "  {}", render_quota_line(quota));
    }
    out
}
