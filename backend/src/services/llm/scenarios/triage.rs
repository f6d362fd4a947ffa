//! Symptom Triage Scenario
//!
//! Builds the augmented prompt sent to the model for non-emergency messages.

use serde_json::{Map, Value};

use super::language::build_language_directive;
use crate::services::llm::ChatMessage;
use crate::services::triage::{GuidelineInfo, LanguageTag};

// ============================================================================
// System Prompt
// ============================================================================

pub const TRIAGE_SYSTEM_PROMPT: &str = r#"
You are a careful, upbeat **virtual primary-care triage assistant**.
**You are not a doctor and do not provide diagnoses or prescriptions.**
Your role:
- Gather concise symptom history (onset, duration, severity, triggers, meds, allergies, relevant conditions).
- Give next-step guidance (self-care, OTC where appropriate, when to seek in-person care).
- Avoid fear-inducing language. Be short and clear.
- If an emergency is suspected, direct to **local emergency services immediately**.
- Never prescribe controlled or prescription-only drugs.
- Be available in **Georgian**, **English**, or **Russian**. Answer in the user's language and keep a warm, reassuring tone.

Formatting:
- Use short paragraphs or bullet points.
- End with a short checklist of what to monitor and when to seek urgent care.
"#;

// ============================================================================
// Prompt
// ============================================================================

/// Inputs for one triage completion.
#[derive(Debug, Clone, Copy)]
pub struct TriagePrompt<'a> {
    pub user_text: &'a str,
    pub language: LanguageTag,
    pub user_context: Option<&'a Map<String, Value>>,
    pub guideline: Option<&'a GuidelineInfo>,
}

impl TriagePrompt<'_> {
    /// System prompt, language directive, optional context and guideline
    /// hints, then the user's message.
    pub fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = vec![
            ChatMessage::system(TRIAGE_SYSTEM_PROMPT),
            ChatMessage::system(build_language_directive(self.language)),
        ];

        if let Some(context) = self.user_context.filter(|c| !c.is_empty()) {
            match serde_json::to_string(context) {
                Ok(json) => messages.push(ChatMessage::system(format!("Patient context: {}", json))),
                Err(e) => tracing::warn!("Skipping unserializable user context: {}", e),
            }
        }

        if let Some(guideline) = self.guideline {
            messages.push(ChatMessage::system(format!(
                "Reference guidance for {}: {}",
                guideline.condition, guideline.guidance
            )));
        }

        messages.push(ChatMessage::user(self.user_text));
        messages
    }
}
