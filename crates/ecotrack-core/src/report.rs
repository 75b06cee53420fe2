//! Report data and its plaintext renderings.
//!
//! [`build_report`] gathers everything an export needs into one value without
//! touching state. The renderers are pure: identical report, identical bytes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementState;
use crate::emission::{compute, FootprintBreakdown, FootprintInput};
use crate::feedback::{evaluate_badges, evaluate_tips, Badge, FootprintBand, TargetComparison, Tip};
use crate::ledger::HistoryEntry;
use crate::tracker::TrackerState;

/// Most history lines a report carries.
pub const MAX_REPORT_HISTORY: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDay {
    pub day_label: String,
    pub date: NaiveDate,
    pub footprint: f64,
    /// At or under 80% of the target
    pub starred: bool,
    pub band: FootprintBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub input: FootprintInput,
    pub breakdown: FootprintBreakdown,
    pub target_kg: f64,
    /// `total <= target`
    pub target_met: bool,
    pub comparison: TargetComparison,
    pub band: FootprintBand,
    pub progress_pct: f64,
    pub week: Vec<ReportDay>,
    pub week_average: f64,
    pub achievements: AchievementState,
    pub badges: Vec<Badge>,
    pub tips: Vec<Tip>,
    pub history: Vec<HistoryEntry>,
}

/// Assemble report data from the current state.
///
/// `history_limit` is capped at [`MAX_REPORT_HISTORY`].
pub fn build_report(state: &TrackerState, generated_at: DateTime<Utc>, history_limit: usize) -> Report {
    let input = state.form;
    let breakdown = compute(&input);
    let target = state.target;

    let week = state
        .week
        .slots()
        .iter()
        .map(|slot| ReportDay {
            day_label: slot.day_label.clone(),
            date: slot.date,
            footprint: slot.footprint,
            starred: target.earns_star(slot.footprint),
            band: target.band(slot.footprint),
        })
        .collect::<Vec<_>>();

    Report {
        generated_at,
        input,
        breakdown,
        target_kg: target.kg(),
        target_met: target.is_met_by(breakdown.total),
        comparison: target.compare(breakdown.total),
        band: target.band(breakdown.total),
        progress_pct: target.progress_pct(breakdown.total),
        week,
        week_average: state.week.average(),
        achievements: state.achievements,
        badges: evaluate_badges(&input, &breakdown, target),
        tips: evaluate_tips(&input, &breakdown),
        history: state
            .history
            .list(Some(history_limit.min(MAX_REPORT_HISTORY)))
            .into_iter()
            .cloned()
            .collect(),
    }
}

impl Report {
    /// Full text report, as written to the download file.
    pub fn render_text(&self) -> String {
        let b = &self.breakdown;
        let mut lines: Vec<String> = Vec::new();

        lines.push("=== ECOTRACK CARBON FOOTPRINT REPORT ===".to_string());
        lines.push(format!(
            "Generated: {} at {}",
            self.generated_at.format("%Y-%m-%d"),
            self.generated_at.format("%H:%M:%S UTC")
        ));
        lines.push(String::new());

        lines.push("CURRENT STATUS:".to_string());
        lines.push(format!("- Today's Carbon Footprint: {:.1} kg CO₂", b.total));
        lines.push(format!("- Personal Target: {} kg CO₂ per day", self.target_kg));
        lines.push(format!(
            "- Target Status: {}",
            if self.target_met { "✅ ACHIEVED" } else { "❌ OVER TARGET" }
        ));
        lines.push(String::new());

        lines.push("TODAY'S BREAKDOWN:".to_string());
        lines.push(format!(
            "- Transport: {:.1} kg CO₂ ({} km traveled)",
            b.transport, self.input.distance_km
        ));
        lines.push(format!(
            "- Electricity: {:.1} kg CO₂ ({} kWh used)",
            b.electricity, self.input.electricity_kwh
        ));
        lines.push(format!("- Diet: {:.1} kg CO₂ ({} diet)", b.diet, self.input.diet));
        lines.push(String::new());

        lines.push("WEEKLY PROGRESS:".to_string());
        for day in &self.week {
            let star = if day.starred { " ⭐" } else { "" };
            lines.push(format!("{}: {:.1} kg CO₂{}", day.day_label, day.footprint, star));
        }
        lines.push(format!("- Weekly Average: {:.1} kg CO₂", self.week_average));
        lines.push(String::new());

        lines.push("ACHIEVEMENTS:".to_string());
        lines.push(format!("- Days Tracked: {}", self.achievements.days_tracked));
        lines.push(format!(
            "- CO₂ Reduction: {:.0}%",
            self.achievements.total_reduction_pct
        ));
        lines.push(format!("- Green Days: {}", self.achievements.green_days));
        lines.push(String::new());

        if !self.badges.is_empty() {
            lines.push("TODAY'S BADGES:".to_string());
            lines.extend(self.badges.iter().map(Badge::to_string));
            lines.push(String::new());
        }

        lines.push("ECO TIPS:".to_string());
        lines.extend(self.tips.iter().map(|tip| format!("• {tip}")));
        lines.push(String::new());

        if self.history.is_empty() {
            lines.push("No history data available yet.".to_string());
        } else {
            lines.push("RECENT HISTORY:".to_string());
            for entry in &self.history {
                lines.push(format!(
                    "{}: {:.1} kg CO₂ ({}km, {}kWh, {})",
                    entry.date, entry.footprint, entry.distance_km, entry.electricity_kwh, entry.diet
                ));
            }
        }
        lines.push(String::new());
        lines.push("=== END OF REPORT ===".to_string());

        lines.join("\n") + "\n"
    }

    /// Short summary meant for pasting.
    pub fn render_summary(&self) -> String {
        let b = &self.breakdown;
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!(
            "=== ECOTRACK REPORT ({}) ===",
            self.generated_at.format("%Y-%m-%d")
        ));
        lines.push(String::new());
        lines.push(format!("Today's Carbon Footprint: {:.1} kg CO₂", b.total));
        lines.push(format!("Personal Target: {} kg CO₂", self.target_kg));
        lines.push(format!(
            "Status: {}",
            if self.target_met { "✅ Target Achieved" } else { "❌ Over Target" }
        ));
        lines.push(String::new());

        lines.push("Breakdown:".to_string());
        lines.push(format!(
            "• Transport: {:.1} kg CO₂ ({} km)",
            b.transport, self.input.distance_km
        ));
        lines.push(format!(
            "• Electricity: {:.1} kg CO₂ ({} kWh)",
            b.electricity, self.input.electricity_kwh
        ));
        lines.push(format!("• Diet: {:.1} kg CO₂ ({})", b.diet, self.input.diet));
        lines.push(String::new());

        lines.push("Weekly Progress:".to_string());
        lines.push(
            self.week
                .iter()
                .map(|d| format!("{}: {:.1} kg", d.day_label, d.footprint))
                .collect::<Vec<_>>()
                .join(", "),
        );
        lines.push(format!("Average: {:.1} kg CO₂", self.week_average));
        lines.push(String::new());

        lines.push(format!(
            "Achievements: {} days tracked, {} green days",
            self.achievements.days_tracked, self.achievements.green_days
        ));

        if !self.badges.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "Today's Badges: {}",
                self.badges.iter().map(Badge::title).collect::<Vec<_>>().join(", ")
            ));
        }

        lines.join("\n") + "\n"
    }

    /// File name used when the text report is saved to disk.
    pub fn file_name(&self) -> String {
        format!("EcoTrack-Report-{}.txt", self.generated_at.format("%Y-%m-%d"))
    }
}
