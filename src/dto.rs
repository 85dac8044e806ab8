//! Data Transfer Objects
//!
//! Request and response types exchanged with the analyzer API.
//! The backend owns all of these; the client only holds read-only copies.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ============================================
// AUTH DTOs
// ============================================

/// Registration request body (JSON)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request body (form-encoded, OAuth2 password flow field names)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginForm {
    /// The account email, sent under the OAuth2 `username` field
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Encode as `application/x-www-form-urlencoded`
    pub fn to_urlencoded(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Account details returned by registration and `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================
// REPORT DTOs
// ============================================

/// An analysed medical report
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Report {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub report_name: String,
    /// ISO 8601 timestamp as produced by the backend
    pub created_at: String,
    #[serde(default)]
    pub extracted_text: String,
    #[serde(default)]
    pub ai_summary: String,
    /// Loose "label: value" lines
    #[serde(default)]
    pub insights: Vec<String>,
}

impl Report {
    /// Human-readable creation time, or the raw value if it doesn't parse
    pub fn created_label(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

// ============================================
// SYMPTOM DTOs
// ============================================

/// Symptom check request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomRequest {
    pub symptoms: String,
}

/// Symptom check response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SymptomResult {
    #[serde(default)]
    pub possible_conditions: Vec<String>,
    /// Set by the server when it declined to analyse the input
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// `/health` response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Format an ISO 8601 timestamp for display.
///
/// Accepts RFC 3339 values and the naive `YYYY-MM-DDTHH:MM:SS[.ffffff]`
/// form the backend emits.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%b %d, %Y %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accepts_mongo_style_id() {
        let json = r#"{
            "_id": "665f1c",
            "user_id": "u1",
            "report_name": "cbc.pdf",
            "extracted_text": "Hemoglobin 13.5",
            "ai_summary": "Normal",
            "insights": ["Hemoglobin: 13.5 g/dL"],
            "created_at": "2024-05-01T10:22:03.123456"
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.id.as_deref(), Some("665f1c"));
        assert_eq!(report.insights.len(), 1);
        assert_eq!(report.created_label(), "May 01, 2024 10:22");
    }

    #[test]
    fn test_report_tolerates_missing_optional_fields() {
        let json = r#"{"report_name": "scan.png", "created_at": "yesterday"}"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert!(report.id.is_none());
        assert!(report.insights.is_empty());
        assert_eq!(report.created_label(), "yesterday");
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_timestamp("2024-01-02T03:04:05Z"), "Jan 02, 2024 03:04");
    }

    #[test]
    fn test_login_form_encoding() {
        let form = LoginForm {
            username: "ana+test@example.com".to_string(),
            password: "p&ss word".to_string(),
        };
        assert_eq!(
            form.to_urlencoded(),
            "username=ana%2Btest%40example.com&password=p%26ss%20word"
        );
    }

    #[test]
    fn test_symptom_result_defaults() {
        let result: SymptomResult =
            serde_json::from_str(r#"{"possible_conditions": [], "message": "Please provide symptoms."}"#)
                .unwrap();
        assert!(result.possible_conditions.is_empty());
        assert_eq!(result.message.as_deref(), Some("Please provide symptoms."));
    }
}
