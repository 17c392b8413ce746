//! Symptom tracker: dated submissions scored for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{SeverityResult, SymptomRecord};
use crate::scoring;

/// A scored submission, ready to render or echo as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomLogEntry {
    pub date: NaiveDate,
    pub symptoms: SymptomRecord,
    pub result: SeverityResult,
}

/// Score a submission for the given date.
pub fn log_symptoms(date: NaiveDate, record: SymptomRecord) -> SymptomLogEntry {
    let result = scoring::score(&record);
    tracing::info!(
        date = %date,
        score = result.score,
        tier = %result.tier,
        "Symptoms logged"
    );
    SymptomLogEntry {
        date,
        symptoms: record,
        result,
    }
}

impl SymptomLogEntry {
    /// Human-readable summary: status, advice, then medications.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Your Gut Health Status: {}", self.result.tier),
            self.result.advice.clone(),
        ];

        if self.result.medications.is_empty() {
            lines.push("No medications required.".to_string());
        } else {
            lines.push("Recommended Medications:".to_string());
            lines.extend(self.result.medications.iter().map(|m| format!("- {m}")));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbdominalPain, Bloating, Diarrhea, Tier};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn entry_carries_record_and_result() {
        let record = SymptomRecord::new(Bloating::Severe, AbdominalPain::Mild, Diarrhea::None);
        let entry = log_symptoms(date(), record);
        assert_eq!(entry.date, date());
        assert_eq!(entry.symptoms, record);
        assert_eq!(entry.result, scoring::score(&record));
        assert_eq!(entry.result.tier, Tier::Moderate);
    }

    #[test]
    fn healthy_summary_says_no_medications() {
        let record = SymptomRecord::new(Bloating::None, AbdominalPain::None, Diarrhea::None);
        let summary = log_symptoms(date(), record).summary();
        assert!(summary.starts_with("Your Gut Health Status: Healthy"));
        assert!(summary.ends_with("No medications required."));
        assert!(!summary.contains("Recommended Medications:"));
    }

    #[test]
    fn unhealthy_summary_lists_medications_in_order() {
        let record =
            SymptomRecord::new(Bloating::Severe, AbdominalPain::Severe, Diarrhea::Frequent);
        let summary = log_symptoms(date(), record).summary();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Your Gut Health Status: Unhealthy");
        assert_eq!(lines[2], "Recommended Medications:");
        assert_eq!(lines[3], "- Probiotics (e.g., Bifidobacterium bifidum)");
        assert_eq!(lines[4], "- Antidiarrheals (e.g., Loperamide for diarrhea)");
        assert_eq!(lines[5], "- PPIs (e.g., Omeprazole for acid reflux)");
    }

    #[test]
    fn json_echo_uses_form_labels() {
        let record = SymptomRecord::new(Bloating::Mild, AbdominalPain::None, Diarrhea::Occasional);
        let json = serde_json::to_value(log_symptoms(date(), record)).unwrap();
        assert_eq!(json["date"], "2025-03-14");
        assert_eq!(json["symptoms"]["bloating"], "Mild");
        assert_eq!(json["symptoms"]["diarrhea"], "Occasional");
        assert_eq!(json["result"]["tier"], "Healthy");
        assert_eq!(json["result"]["score"], 2);
    }
}
