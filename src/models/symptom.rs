use serde::{Deserialize, Serialize};

use super::enums::{AbdominalPain, Bloating, Diarrhea, Tier};

/// One symptom submission. Built fresh per submission and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub bloating: Bloating,
    pub abdominal_pain: AbdominalPain,
    pub diarrhea: Diarrhea,
}

impl SymptomRecord {
    pub fn new(bloating: Bloating, abdominal_pain: AbdominalPain, diarrhea: Diarrhea) -> Self {
        Self {
            bloating,
            abdominal_pain,
            diarrhea,
        }
    }

    /// Every possible submission, 27 in total.
    pub fn all() -> impl Iterator<Item = SymptomRecord> {
        Bloating::ALL.iter().flat_map(|&bloating| {
            AbdominalPain::ALL.iter().flat_map(move |&abdominal_pain| {
                Diarrhea::ALL
                    .iter()
                    .map(move |&diarrhea| SymptomRecord::new(bloating, abdominal_pain, diarrhea))
            })
        })
    }
}

/// Derived classification of a `SymptomRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityResult {
    pub score: u8,
    pub tier: Tier,
    pub advice: String,
    pub medications: Vec<String>,
}
