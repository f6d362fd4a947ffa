//! Keyword-based symptom classification
//!
//! Categories are tested in a fixed order; the first hit is the primary
//! symptom and later hits are kept as related. The keyword lists are small and
//! hand-curated, not clinically validated.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse symptom category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    Headache,
    Fever,
    Cough,
    Cold,
    StomachPain,
    General,
}

/// Categories that carry keywords, in scan order. `General` is the fallback.
pub const SCAN_ORDER: [SymptomCategory; 5] = [
    SymptomCategory::Headache,
    SymptomCategory::Fever,
    SymptomCategory::Cough,
    SymptomCategory::Cold,
    SymptomCategory::StomachPain,
];

impl SymptomCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Headache => "headache",
            Self::Fever => "fever",
            Self::Cough => "cough",
            Self::Cold => "cold",
            Self::StomachPain => "stomach_pain",
            Self::General => "general",
        }
    }

    /// Lowercase keywords (en/ka/ru) that indicate this category.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Headache => &[
                "headache",
                "head hurts",
                "migraine",
                "თავის ტკივილი",
                "თავი მტკივა",
                "შაკიკი",
                "головная боль",
                "болит голова",
                "мигрень",
            ],
            Self::Fever => &[
                "fever",
                "temperature",
                "chills",
                "სიცხე",
                "ტემპერატურა",
                "შემცივნება",
                "температура",
                "жар",
                "озноб",
            ],
            Self::Cough => &["cough", "ხველა", "ახველებს", "кашель", "кашля", "кашляю"],
            Self::Cold => &[
                "cold",
                "runny nose",
                "sore throat",
                "stuffy nose",
                "სურდო",
                "ცხვირიდან დენა",
                "ყელის ტკივილი",
                "насморк",
                "простуд",
                "боль в горле",
                "болит горло",
            ],
            Self::StomachPain => &[
                "stomach",
                "abdominal pain",
                "belly",
                "nausea",
                "მუცლის ტკივილი",
                "მუცელი მტკივა",
                "გულისრევა",
                "боль в животе",
                "болит живот",
                "тошнота",
            ],
            Self::General => &[],
        }
    }
}

impl std::fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse severity attached to a reply. `Emergency` is only produced by the
/// red-flag short-circuit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Moderate,
    High,
    Emergency,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Emergency => "emergency",
        }
    }
}

/// Words that raise the urgency hint from low to moderate.
pub static HIGH_URGENCY_KEYWORDS: &[&str] = &[
    "severe",
    "can't",
    "cannot",
    "emergency",
    "unbearable",
    "worst",
    "ძლიერი",
    "აუტანელი",
    "ვერ ვიტან",
    "გადაუდებელი",
    "сильн",
    "не могу",
    "невыносим",
    "срочно",
];

/// Result of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomAssessment {
    pub primary: SymptomCategory,
    /// Other matching categories, in scan order
    pub related: Vec<SymptomCategory>,
    pub urgency: UrgencyLevel,
}

pub fn classify_symptoms(text: &str) -> SymptomAssessment {
    let lower = text.to_lowercase();

    let mut matched = SCAN_ORDER
        .iter()
        .copied()
        .filter(|category| category.keywords().iter().any(|kw| lower.contains(kw)));
    let primary = matched.next().unwrap_or(SymptomCategory::General);
    let related = matched.collect();

    let urgency = if HIGH_URGENCY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        UrgencyLevel::Moderate
    } else {
        UrgencyLevel::Low
    };

    SymptomAssessment { primary, related, urgency }
}
