//! Symptom severity scoring.
//!
//! Each symptom contributes 0, 1 or 2 points. The summed score (0–6) is
//! classified through an ordered threshold table; the first row whose upper
//! bound covers the score decides the tier.

use crate::models::{AbdominalPain, Bloating, Diarrhea, SeverityResult, SymptomRecord, Tier};

/// Highest score a record can reach.
pub const MAX_SCORE: u8 = 6;

/// Ordered (inclusive upper bound, tier) rows. The last row is open-ended.
const THRESHOLDS: &[(u8, Tier)] = &[
    (2, Tier::Healthy),
    (4, Tier::Moderate),
    (u8::MAX, Tier::Unhealthy),
];

const HEALTHY_ADVICE: &str =
    "Your gut health looks great! No medications required. Keep maintaining a healthy lifestyle.";
const MODERATE_ADVICE: &str =
    "Your gut health is slightly off balance. Consider reviewing your diet and lifestyle.";
const UNHEALTHY_ADVICE: &str =
    "Your gut health seems poor. It's recommended to seek professional advice.";

const MODERATE_MEDICATIONS: &[&str] = &[
    "Probiotics (e.g., Lactobacillus acidophilus)",
    "Antispasmodics (e.g., Dicyclomine)",
];
const UNHEALTHY_MEDICATIONS: &[&str] = &[
    "Probiotics (e.g., Bifidobacterium bifidum)",
    "Antidiarrheals (e.g., Loperamide for diarrhea)",
    "PPIs (e.g., Omeprazole for acid reflux)",
];

impl Bloating {
    pub fn weight(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Mild => 1,
            Self::Severe => 2,
        }
    }
}

impl AbdominalPain {
    pub fn weight(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Mild => 1,
            Self::Severe => 2,
        }
    }
}

impl Diarrhea {
    pub fn weight(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Occasional => 1,
            Self::Frequent => 2,
        }
    }
}

impl Tier {
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Healthy => HEALTHY_ADVICE,
            Self::Moderate => MODERATE_ADVICE,
            Self::Unhealthy => UNHEALTHY_ADVICE,
        }
    }

    /// Suggested medications, in display order.
    pub fn medications(&self) -> &'static [&'static str] {
        match self {
            Self::Healthy => &[],
            Self::Moderate => MODERATE_MEDICATIONS,
            Self::Unhealthy => UNHEALTHY_MEDICATIONS,
        }
    }
}

/// Sum of the per-symptom weights.
pub fn severity_score(record: &SymptomRecord) -> u8 {
    record.bloating.weight() + record.abdominal_pain.weight() + record.diarrhea.weight()
}

/// Map a raw score to its tier.
pub fn classify(score: u8) -> Tier {
    THRESHOLDS
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::Unhealthy)
}

/// Score a submission and attach the tier's advice and medications.
pub fn score(record: &SymptomRecord) -> SeverityResult {
    let score = severity_score(record);
    let tier = classify(score);

    SeverityResult {
        score,
        tier,
        advice: tier.advice().to_string(),
        medications: tier.medications().iter().map(|m| m.to_string()).collect(),
    }
}
