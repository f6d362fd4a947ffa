//! Emergency red-flag scanning
//!
//! The catalog is scanned in declaration order and the first hit wins, so the
//! order below is the priority among simultaneous matches. The language tag on
//! each phrase is informational; every phrase is checked regardless of the
//! detected language.

use super::language::LanguageTag;

/// An emergency keyword phrase, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedFlag {
    pub phrase: &'static str,
    pub language: LanguageTag,
}

const fn flag(phrase: &'static str, language: LanguageTag) -> RedFlag {
    RedFlag { phrase, language }
}

pub static RED_FLAGS: &[RedFlag] = &[
    // EN
    flag("chest pain", LanguageTag::En),
    flag("shortness of breath", LanguageTag::En),
    flag("severe headache", LanguageTag::En),
    flag("loss of consciousness", LanguageTag::En),
    flag("stroke", LanguageTag::En),
    flag("suicidal", LanguageTag::En),
    // KA
    flag("მკერდის ტკივილი", LanguageTag::Ka),
    flag("სუნთქვის უკმარისობა", LanguageTag::Ka),
    flag("ძლიერი თავის ტკივილი", LanguageTag::Ka),
    flag("ბოდავს", LanguageTag::Ka),
    flag("თვითმკვლელობა", LanguageTag::Ka),
    // RU
    flag("боль в груди", LanguageTag::Ru),
    flag("одышка", LanguageTag::Ru),
    flag("сильная головная боль", LanguageTag::Ru),
    flag("потеря сознания", LanguageTag::Ru),
    flag("инсульт", LanguageTag::Ru),
    flag("суицид", LanguageTag::Ru),
];

/// Return the first catalog phrase contained in the lowercased text.
pub fn scan_red_flags(text: &str) -> Option<&'static RedFlag> {
    let lower = text.to_lowercase();
    RED_FLAGS.iter().find(|flag| lower.contains(flag.phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english_phrase_case_insensitively() {
        let hit = scan_red_flags("I have CHEST Pain since morning").unwrap();
        assert_eq!(hit.phrase, "chest pain");
        assert_eq!(hit.language, LanguageTag::En);
    }

    #[test]
    fn test_detects_georgian_and_russian_phrases() {
        assert_eq!(scan_red_flags("მაქვს მკერდის ტკივილი").unwrap().phrase, "მკერდის ტკივილი");
        assert_eq!(scan_red_flags("Сильная одышка ночью").unwrap().phrase, "одышка");
        assert_eq!(scan_red_flags("БОЛЬ В ГРУДИ").unwrap().phrase, "боль в груди");
    }

    #[test]
    fn test_catalog_order_breaks_ties() {
        // Both phrases are present; "chest pain" is declared first.
        let hit = scan_red_flags("suicidal thoughts and chest pain").unwrap();
        assert_eq!(hit.phrase, "chest pain");
    }

    #[test]
    fn test_scan_ignores_detected_language() {
        let hit = scan_red_flags("У меня chest pain").unwrap();
        assert_eq!(hit.phrase, "chest pain");
    }

    #[test]
    fn test_no_match() {
        assert!(scan_red_flags("mild headache after work").is_none());
        assert!(scan_red_flags("").is_none());
        assert!(scan_red_flags("თავის ტკივილი მაქვს").is_none());
    }

    #[test]
    fn test_appending_text_keeps_match() {
        for flag in RED_FLAGS {
            let base = format!("patient reports {}", flag.phrase);
            for suffix in ["", " and a cough", " 123 ???", " კი", " да"] {
                let text = format!("{base}{suffix}");
                assert!(scan_red_flags(&text).is_some(), "lost match for {text:?}");
            }
        }
    }

    #[test]
    fn test_catalog_phrases_are_lowercase() {
        for flag in RED_FLAGS {
            assert_eq!(flag.phrase, flag.phrase.to_lowercase());
        }
    }
}
