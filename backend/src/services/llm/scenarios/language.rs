//! Language-aware helpers for LLM prompts
//!
//! The reply language follows the language detected from the user's own
//! message, not the `Accept-Language` header.

use crate::services::triage::LanguageTag;

/// Build the system directive that pins the reply language.
///
/// Kept short so that the model does not drift into another language.
pub fn build_language_directive(lang: LanguageTag) -> String {
    format!(
        "Respond in {}. Keep a friendly, calm style. Keep it brief.",
        lang.english_name()
    )
}
