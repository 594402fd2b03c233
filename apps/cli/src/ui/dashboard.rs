//! Terminal rendering of the dashboard. Everything here is pure: it turns
//! session state into tables and strings and never prints.

use analytics_snapshot::FacilityProfile;
use chrono::{DateTime, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use secure_analytics::application::DashboardSession;
use secure_analytics::domain::charts::{environment_radar, object_bars, trend_series};
use secure_analytics::domain::indicators::{Group, IndicatorKey, Polarity};
use secure_analytics::domain::scoring::{ProgressTier, RiskAggregator, RiskClass, ScoreReport};
use secure_analytics::domain::sources::DataSourceBoard;

use crate::ui::{Icon, Theme};

/// Characters used for a full-width bar.
const BAR_CELLS: usize = 20;

fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn risk_color(class: RiskClass) -> Color {
    match class {
        RiskClass::Low => Color::Green,
        RiskClass::Medium => Color::Yellow,
        RiskClass::High => Color::Red,
    }
}

fn tier_color(tier: ProgressTier) -> Color {
    match tier {
        ProgressTier::Good => Color::Green,
        ProgressTier::Warning => Color::Yellow,
        ProgressTier::Critical => Color::Red,
    }
}

/// Text bar for a width in percent.
pub fn bar(width: f64) -> String {
    let filled = ((width / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// `just now`, `12m ago`, `3h ago`, `2d ago`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

pub fn kpi_table(report: &ScoreReport) -> Table {
    let mut table = table();
    table.set_header(vec!["KPI", "Value", "Class", "Level"]);

    for card in &report.cards {
        let color = card
            .class
            .map(risk_color)
            .unwrap_or_else(|| tier_color(card.bar.tier));
        table.add_row(vec![
            Cell::new(card.id),
            Cell::new(&card.display)
                .fg(color)
                .set_alignment(CellAlignment::Right),
            Cell::new(card.class.map(|c| c.as_str()).unwrap_or("-")),
            Cell::new(bar(card.bar.width)).fg(tier_color(card.bar.tier)),
        ]);
    }
    table
}

pub fn indicator_table(aggregator: &RiskAggregator) -> Table {
    let mut table = table();
    table.set_header(vec!["Group", "Key", "Indicator", "Value", "Scale"]);

    for key in IndicatorKey::ALL {
        let value = aggregator
            .value(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let scale = match key.polarity() {
            Polarity::Direct => "higher is safer",
            Polarity::Inverse => "higher is riskier",
        };
        table.add_row(vec![
            Cell::new(key.group()),
            Cell::new(key.as_str()),
            Cell::new(key.label()),
            Cell::new(value).set_alignment(CellAlignment::Right),
            Cell::new(scale),
        ]);
    }
    table
}

pub fn radar_table(aggregator: &RiskAggregator) -> Table {
    let radar = environment_radar(aggregator.set(Group::Environment));
    let mut table = table();
    table.set_header(vec!["Axis", "Current", "Target"]);

    for ((label, current), target) in radar.labels.iter().zip(&radar.current).zip(&radar.target) {
        let current = current
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(label),
            Cell::new(current).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", target)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn object_bar_table(aggregator: &RiskAggregator) -> Table {
    let mut table = table();
    table.set_header(vec!["Measure", "Value", "Level"]);

    for point in object_bars(aggregator.set(Group::Object)) {
        let (value, level) = match (point.value, point.tier) {
            (Some(v), Some(tier)) => (
                v.to_string(),
                Cell::new(bar(v as f64 * 10.0)).fg(tier_color(tier)),
            ),
            _ => ("-".to_string(), Cell::new("not assessed")),
        };
        table.add_row(vec![
            Cell::new(point.label),
            Cell::new(value).set_alignment(CellAlignment::Right),
            level,
        ]);
    }
    table
}

pub fn trend_table() -> Table {
    let trend = trend_series();
    let mut table = table();
    table.set_header(vec!["Month", "Total risk", "Cyber threats", "Stability"]);

    for (i, month) in trend.months.iter().enumerate() {
        let cell = |series: &[f64]| {
            Cell::new(format!("{:.1}", series[i])).set_alignment(CellAlignment::Right)
        };
        table.add_row(vec![
            Cell::new(month),
            cell(&trend.total_risk),
            cell(&trend.cyber_threats),
            cell(&trend.environment_stability),
        ]);
    }
    table
}

pub fn sources_table(board: &DataSourceBoard, now: DateTime<Utc>) -> Table {
    let mut table = table();
    table.set_header(vec!["Source", "Status", "Last update"]);

    for source in board.sources() {
        table.add_row(vec![
            Cell::new(&source.name),
            Cell::new(source.status),
            Cell::new(relative_time(source.last_update, now)),
        ]);
    }
    table
}

pub fn facility_table(facility: &FacilityProfile) -> Table {
    let text = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    let mut table = table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Name".to_string(), text(facility.object_name.clone())]);
    table.add_row(vec!["Location".to_string(), text(facility.location.clone())]);
    table.add_row(vec![
        "Type".to_string(),
        text(facility.object_type.map(|t| t.to_string())),
    ]);
    table.add_row(vec![
        "Protection class".to_string(),
        text(facility.protection_class.map(|p| p.to_string())),
    ]);
    table.add_row(vec![
        "Employees".to_string(),
        text(facility.employees.map(|e| e.to_string())),
    ]);
    table.add_row(vec![
        "Operating hours".to_string(),
        text(facility.operating_hours.clone()),
    ]);
    table
}

/// Full dashboard. `charts` adds radar, object bars and trend.
pub fn render(session: &DashboardSession, charts: bool, now: DateTime<Utc>) -> String {
    let mut out = Vec::new();
    let heading = |icon: Icon, title: &str| format!("\n{} {}", icon, Theme::primary(title));

    let title = session
        .facility()
        .object_name
        .clone()
        .unwrap_or_else(|| "Unnamed facility".to_string());
    out.push(format!("{} {}", Icon::Shield, Theme::bold(title)));

    match session.report() {
        Some(report) => out.push(kpi_table(&report).to_string()),
        None => out.push(Theme::warning("No risk scores yet")),
    }

    out.push(heading(Icon::Building, "Facility"));
    out.push(facility_table(session.facility()).to_string());

    out.push(heading(Icon::Chart, "Indicators"));
    out.push(indicator_table(session.aggregator()).to_string());

    if charts {
        out.push(heading(Icon::Chart, "Environment profile"));
        out.push(radar_table(session.aggregator()).to_string());
        out.push(heading(Icon::Chart, "Object protection"));
        out.push(object_bar_table(session.aggregator()).to_string());
        out.push(heading(Icon::Chart, "Trend"));
        out.push(trend_table().to_string());
    }

    out.push(heading(Icon::Satellite, "Data sources"));
    out.push(sources_table(session.sources(), now).to_string());

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar(5.0).chars().filter(|c| *c == '█').count(), 1);
        assert_eq!(bar(100.0).chars().filter(|c| *c == '█').count(), BAR_CELLS);
        assert_eq!(bar(250.0).chars().count(), BAR_CELLS);
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(12), now), "12m ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1h ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_facility_table_marks_missing_fields() {
        let rendered = facility_table(&FacilityProfile::default()).to_string();
        assert!(rendered.contains("Operating hours"));
        assert!(rendered.contains('-'));
    }
}
