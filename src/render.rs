//! Terminal Rendering
//!
//! Plain-text versions of the result card, report list, and chart section.

use crate::dto::Report;
use crate::insights::ChartPoint;

const BAR_WIDTH: usize = 40;
/// Placeholder for empty cards and charts
pub const NO_DATA: &str = "No data available yet.";

/// Title underlined with dashes
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(title.chars().count().max(3)))
}

/// Title, body, optional footer
pub fn result_card(title: &str, content: &str, footer: Option<&str>) -> String {
    let body = if content.trim().is_empty() {
        NO_DATA
    } else {
        content
    };

    let mut out = format!("{}{}\n", heading(title), body);
    if let Some(footer) = footer {
        out.push('\n');
        out.push_str(footer);
        out.push('\n');
    }
    out
}

/// Numbered report list, marking the selected entry
pub fn report_table(reports: &[Report], selected: Option<usize>) -> String {
    if reports.is_empty() {
        return "No reports yet. Upload your first medical report to begin.\n".to_string();
    }

    let mut out = format!("{:<4} {:<32} {}\n", "#", "Report", "Created");
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for (i, report) in reports.iter().enumerate() {
        let marker = if Some(i) == selected { '*' } else { ' ' };
        out.push_str(&format!(
            "{}{:<3} {:<32} {}\n",
            marker,
            i,
            truncate(&report.report_name, 32),
            report.created_label()
        ));
    }
    out
}

/// Full detail view: summary, raw text, insights
pub fn report_detail(report: &Report) -> String {
    let footer = format!("Generated {}", report.created_label());
    let mut out = result_card("AI Summary", &report.ai_summary, Some(&footer));

    out.push('\n');
    let text = if report.extracted_text.trim().is_empty() {
        "Select a report to view raw OCR output."
    } else {
        &report.extracted_text
    };
    out.push_str(&result_card("Extracted Text", text, None));

    out.push_str("\nInsights\n--------\n");
    if report.insights.is_empty() {
        out.push_str("Insights will appear after uploading reports.\n");
    } else {
        for insight in &report.insights {
            out.push_str(&format!("• {}\n", insight));
        }
    }
    out
}

/// Horizontal bar chart, bars scaled to the largest value
pub fn bar_chart(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return format!("Health Overview\n\n{}\n", NO_DATA);
    }

    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let mut out = String::from("Health Overview\n\n");
    for point in points {
        let len = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<width$} | {} {}\n",
            truncate(&point.label, label_width),
            "█".repeat(len),
            format_value(point.value),
            width = label_width
        ));
    }
    out
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
