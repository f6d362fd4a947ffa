//! Symptom triage rule layer
//!
//! Runs before any model call: language detection, emergency red-flag
//! matching and a static symptom → guideline lookup. All tables are
//! read-only constants, so one orchestrator can serve concurrent requests.

mod classifier;
mod composer;
mod guidelines;
mod language;
mod orchestrator;
mod red_flags;

pub use classifier::{
    HIGH_URGENCY_KEYWORDS, SCAN_ORDER, SymptomAssessment, SymptomCategory, UrgencyLevel,
    classify_symptoms,
};
pub use composer::{
    MAX_FOLLOW_UP_QUESTIONS, emergency_actions, follow_up_questions, suggested_actions,
};
pub use guidelines::{GUIDELINES, GuidelineEntry, GuidelineInfo, GuidelineStore};
pub use language::{LanguageTag, detect_language};
pub use orchestrator::{
    TriageError, TriageOrchestrator, TriageReply, Utterance, emergency_message, fallback_message,
};
pub use red_flags::{RED_FLAGS, RedFlag, scan_red_flags};

#[cfg(test)]
mod tests;
