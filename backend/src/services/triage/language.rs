//! Script-based language detection
//!
//! Counts Georgian and Cyrillic code points and picks the dominant script.
//! This is a heuristic: mixed-script text resolves deterministically, not
//! necessarily correctly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Languages the triage layer can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    En,
    Ka,
    Ru,
}

impl LanguageTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ka => "ka",
            Self::Ru => "ru",
        }
    }

    /// English name used in model directives
    pub fn english_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ka => "Georgian",
            Self::Ru => "Russian",
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const GEORGIAN_BLOCK: std::ops::RangeInclusive<char> = '\u{10A0}'..='\u{10FF}';
const CYRILLIC_BLOCK: std::ops::RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

/// Classify text as Georgian, Russian or English. Never fails; empty input is `En`.
pub fn detect_language(text: &str) -> LanguageTag {
    let (georgian, cyrillic) = text.chars().fold((0usize, 0usize), |(ka, ru), ch| {
        (
            ka + GEORGIAN_BLOCK.contains(&ch) as usize,
            ru + CYRILLIC_BLOCK.contains(&ch) as usize,
        )
    });

    if georgian > cyrillic && georgian > 0 {
        LanguageTag::Ka
    } else if cyrillic > 0 {
        LanguageTag::Ru
    } else {
        LanguageTag::En
    }
}
