//! Report Board
//!
//! The reports fetched for the current page, which one is selected, and the
//! dashboard's upload and symptom-check status.

use crate::dto::{Report, SymptomRequest, SymptomResult};
use crate::error::FailureDetail;
use crate::insights::{chart_points, ChartPoint};

pub const UPLOAD_OK: &str = "Report analysed successfully.";
pub const UPLOAD_FALLBACK: &str = "Upload failed. Please try again.";
pub const SYMPTOMS_OK: &str = "Symptom analysis ready.";
pub const SYMPTOMS_FALLBACK: &str = "Unable to analyse symptoms.";

/// Per-page report view state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportBoard {
    reports: Vec<Report>,
    selected: Option<usize>,
    uploading: bool,
    status: Option<String>,
    conditions: Vec<String>,
}

impl ReportBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh fetch; the first report becomes selected
    pub fn load(&mut self, reports: Vec<Report>) {
        self.selected = if reports.is_empty() { None } else { Some(0) };
        self.reports = reports;
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn selected(&self) -> Option<&Report> {
        self.selected.and_then(|i| self.reports.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Select the report at `index`. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.reports.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Chart points for the selected report's insights
    pub fn chart(&self) -> Vec<ChartPoint> {
        self.selected()
            .map(|r| chart_points(&r.insights))
            .unwrap_or_default()
    }

    /// Status line shared by upload and symptom check
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// True while an upload is outstanding; the upload trigger is disabled
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Start an upload. Returns `false` if one is already outstanding.
    pub fn begin_upload(&mut self) -> bool {
        if self.uploading {
            return false;
        }
        self.uploading = true;
        self.status = None;
        true
    }

    /// Settle the outstanding upload. The trigger is re-enabled either way.
    pub fn finish_upload<E: FailureDetail>(&mut self, result: Result<Report, E>) {
        self.uploading = false;

        match result {
            Ok(report) => {
                self.reports.insert(0, report);
                self.selected = Some(0);
                self.status = Some(UPLOAD_OK.to_string());
            }
            Err(e) => {
                self.status = Some(e.message_or(UPLOAD_FALLBACK));
            }
        }
    }

    /// Conditions from the last symptom check
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Build a symptom request. Blank input sends nothing.
    pub fn begin_symptom_check(&mut self, symptoms: &str) -> Option<SymptomRequest> {
        if symptoms.trim().is_empty() {
            return None;
        }
        self.status = None;
        Some(SymptomRequest {
            symptoms: symptoms.to_string(),
        })
    }

    pub fn finish_symptom_check<E: FailureDetail>(&mut self, result: Result<SymptomResult, E>) {
        match result {
            Ok(result) => {
                self.status = Some(match result.message {
                    Some(message) if result.possible_conditions.is_empty() => message,
                    _ => SYMPTOMS_OK.to_string(),
                });
                self.conditions = result.possible_conditions;
            }
            Err(e) => {
                self.status = Some(e.message_or(SYMPTOMS_FALLBACK));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiFailure;

    fn report(name: &str, insights: &[&str]) -> Report {
        Report {
            id: Some(format!("id-{}", name)),
            user_id: None,
            report_name: name.to_string(),
            created_at: "2024-05-01T10:00:00".to_string(),
            extracted_text: String::new(),
            ai_summary: format!("summary of {}", name),
            insights: insights.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_load_selects_first() {
        let mut board = ReportBoard::new();
        board.load(vec![report("a", &[]), report("b", &[])]);
        assert_eq!(board.selected().unwrap().report_name, "a");

        board.select(1);
        board.load(vec![report("c", &[]), report("d", &[])]);
        assert_eq!(board.selected().unwrap().report_name, "c");
    }

    #[test]
    fn test_load_empty_selects_nothing() {
        let mut board = ReportBoard::new();
        board.load(vec![report("a", &[])]);
        board.load(Vec::new());
        assert!(board.selected().is_none());
        assert!(board.chart().is_empty());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut board = ReportBoard::new();
        board.load(vec![report("a", &[])]);
        assert!(!board.select(3));
        assert_eq!(board.selected_index(), Some(0));
    }

    #[test]
    fn test_upload_success_prepends_and_selects() {
        let mut board = ReportBoard::new();
        board.load(vec![report("old", &[])]);
        board.select(0);

        assert!(board.begin_upload());
        assert!(board.is_uploading());
        board.finish_upload::<ApiFailure>(Ok(report("new", &["Glucose: 95 mg/dL"])));

        assert!(!board.is_uploading());
        assert_eq!(board.reports().len(), 2);
        assert_eq!(board.selected().unwrap().report_name, "new");
        assert_eq!(board.status(), Some(UPLOAD_OK));
        assert_eq!(board.chart()[0].value, 95.0);
    }

    #[test]
    fn test_upload_failure_reenables_trigger() {
        let mut board = ReportBoard::new();
        assert!(board.begin_upload());
        assert!(!board.begin_upload());

        let failure = ApiFailure::from_response(400, r#"{"detail": "Unsupported file type."}"#);
        board.finish_upload(Err(failure));

        assert!(!board.is_uploading());
        assert!(board.reports().is_empty());
        assert_eq!(board.status(), Some("Unsupported file type."));
        assert!(board.begin_upload());

        board.finish_upload(Err(ApiFailure::transport()));
        assert_eq!(board.status(), Some(UPLOAD_FALLBACK));
    }

    #[test]
    fn test_blank_symptoms_send_nothing() {
        let mut board = ReportBoard::new();
        assert!(board.begin_symptom_check("   \n").is_none());

        let request = board.begin_symptom_check("headache, fever").unwrap();
        assert_eq!(request.symptoms, "headache, fever");
    }

    #[test]
    fn test_symptom_results() {
        let mut board = ReportBoard::new();
        board.finish_symptom_check::<ApiFailure>(Ok(SymptomResult {
            possible_conditions: vec!["Migraine".to_string(), "Influenza".to_string()],
            message: None,
        }));
        assert_eq!(board.conditions(), ["Migraine", "Influenza"]);
        assert_eq!(board.status(), Some(SYMPTOMS_OK));

        board.finish_symptom_check::<ApiFailure>(Ok(SymptomResult {
            possible_conditions: Vec::new(),
            message: Some("Please provide symptoms.".to_string()),
        }));
        assert!(board.conditions().is_empty());
        assert_eq!(board.status(), Some("Please provide symptoms."));

        board.finish_symptom_check(Err(ApiFailure::transport()));
        assert_eq!(board.status(), Some(SYMPTOMS_FALLBACK));
    }

    #[test]
    fn test_chart_uses_selected_report() {
        let mut board = ReportBoard::new();
        board.load(vec![
            report("a", &["Hemoglobin: 13.5 g/dL"]),
            report("b", &["Platelets: low", "WBC: 7.2"]),
        ]);
        board.select(1);

        let chart = board.chart();
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].value, 20.0);
        assert_eq!(chart[1].value, 7.2);
    }
}
