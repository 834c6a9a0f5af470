//! Recommendation and schedule views built from backend-computed plans.

#[cfg(test)]
#[path = "quota_plan_test.rs"]
mod quota_plan_test;

use std::fmt::Write as _;

use super::quota_card::platform_icon;
use crate::net::types::{PlatformQuota, Recommendations, Schedule};

pub const NO_RECOMMENDATION: &str = "No recommendation available";
pub const EMPTY_SCHEDULE: &str = "Nothing scheduled";

/// `icon name (urgency N)`.
#[must_use]
pub fn platform_summary(platform: &PlatformQuota) -> String {
    format!(
        "{} {} (urgency {:.0})",
        platform_icon(&platform.platform_id),
        platform.platform_name,
        platform.urgency_score.round()
    )
}

#[must_use]
pub fn render_recommendations(recommendations: &Recommendations) -> String {
    let mut out = String::new();
    match &recommendations.recommended_platform {
        Some(platform) => {
            let _ = writeln!(out, "Use next: {}", platform_summary(platform));
        }
        None => {
            let _ = writeln!(out, "{NO_RECOMMENDATION}");
        }
    }
    if !recommendations.reason.is_empty() {
        let _ = writeln!(out, "  {}", recommendations.reason);
    }
    if !recommendations.alternatives.is_empty() {
        out.push_str("Alternatives:\n");
        for platform in &recommendations.alternatives {
            let _ = writeln!(out, "  {}", platform_summary(platform));
        }
    }
    out
}

/// Schedule header followed by one line per slot, with the reason indented
/// underneath when present.
#[must_use]
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} schedule, generated {}", schedule.schedule_type, schedule.generated_at);
    if schedule.schedule.is_empty() {
        let _ = writeln!(out, "{EMPTY_SCHEDULE}");
    }
    for item in &schedule.schedule {
        let _ = writeln!(
            out,
            "  {:<12} {} {}: {}",
            item.time_slot,
            platform_icon(&item.platform_id),
            item.platform_name,
            item.action
        );
        if !item.reason.is_empty() {
            let _ = writeln!(out, "  {:<12} {}", "", item.reason);
        }
    }
    out
}
