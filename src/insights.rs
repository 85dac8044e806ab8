//! Insight Chart Values
//!
//! Turns loose "label: value" insight strings into chart points.
//!
//! A line without a colon or without a usable number still yields a point
//! with a position-based placeholder value, so the chart keeps one bar per
//! insight.

use regex::Regex;
use std::sync::OnceLock;

/// One bar on the health overview chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

fn numeric_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"[0-9.]+").expect("static regex"))
}

/// Placeholder value for an insight at `index` with no usable number
pub fn fallback_value(index: usize) -> f64 {
    20.0 + 10.0 * index as f64
}

/// Parse a single insight line at position `index`.
///
/// Only the text between the first and second colon is searched for a
/// value, and only its first run of digits and dots counts.
pub fn parse_insight(insight: &str, index: usize) -> ChartPoint {
    let mut parts = insight.split(':');
    let label = parts.next().unwrap_or_default().trim();
    let value = parts
        .next()
        .and_then(|text| numeric_token().find(text))
        .and_then(|token| token.as_str().parse::<f64>().ok())
        .unwrap_or_else(|| fallback_value(index));

    ChartPoint {
        label: if label.is_empty() {
            format!("Insight {}", index + 1)
        } else {
            label.to_string()
        },
        value,
    }
}

/// Chart points for a report's insights, in order
pub fn chart_points(insights: &[String]) -> Vec<ChartPoint> {
    insights
        .iter()
        .enumerate()
        .map(|(index, insight)| parse_insight(insight, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_value_with_unit() {
        let point = parse_insight("Hemoglobin: 13.5 g/dL", 0);
        assert_eq!(point.label, "Hemoglobin");
        assert_eq!(point.value, 13.5);
    }

    #[test]
    fn test_first_numeric_token_wins() {
        let point = parse_insight("Blood pressure: 120/80 mmHg", 3);
        assert_eq!(point.value, 120.0);
    }

    #[test]
    fn test_missing_number_falls_back_by_index() {
        let points = chart_points(&[
            "Glucose: normal".to_string(),
            "Cholesterol: elevated".to_string(),
            "Risk: low".to_string(),
        ]);
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_no_colon_keeps_whole_line_as_label() {
        let point = parse_insight("  Follow up with GP in 2 weeks ", 1);
        assert_eq!(point.label, "Follow up with GP in 2 weeks");
        assert_eq!(point.value, 30.0);
    }

    #[test]
    fn test_empty_label_gets_numbered_name() {
        let point = parse_insight(": 7", 4);
        assert_eq!(point.label, "Insight 5");
        assert_eq!(point.value, 7.0);
    }

    #[test]
    fn test_only_second_segment_is_searched() {
        let point = parse_insight("Time: now: 12", 0);
        assert_eq!(point.label, "Time");
        assert_eq!(point.value, 20.0);
    }

    #[test]
    fn test_malformed_number_falls_back() {
        assert_eq!(parse_insight("Dots: ...", 0).value, 20.0);
        assert_eq!(parse_insight("Version: 1.2.3", 2).value, 40.0);
    }

    #[test]
    fn test_leading_sign_is_ignored() {
        assert_eq!(parse_insight("Delta: -4.5", 0).value, 4.5);
    }

    #[test]
    fn test_empty_insights() {
        assert!(chart_points(&[]).is_empty());
    }
}
