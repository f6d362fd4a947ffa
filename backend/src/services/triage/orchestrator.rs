//! Triage orchestration
//!
//! One run per message: detect language, short-circuit on red flags,
//! otherwise classify, look up guidance, ask the model and merge the result.
//! Model failures never surface to the caller; they degrade to a fixed
//! localized reply.

use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

use super::classifier::{SymptomCategory, UrgencyLevel, classify_symptoms};
use super::composer::{emergency_actions, follow_up_questions, suggested_actions};
use super::guidelines::{GuidelineInfo, GuidelineStore};
use super::language::{LanguageTag, detect_language};
use super::red_flags::{RedFlag, scan_red_flags};
use crate::services::llm::scenarios::triage::TriagePrompt;
use crate::services::llm::{ChatCompletionRequest, ChatModel, GenerationParams, LLMError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    #[error("Message must not be empty")]
    EmptyMessage,
}

/// Raw user input for one request.
#[derive(Debug, Clone, Default)]
pub struct Utterance {
    pub text: String,
    pub user_context: Option<Map<String, Value>>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), user_context: None }
    }

    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.user_context = Some(context);
        self
    }
}

/// Structured outcome of one triage run.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageReply {
    pub reply: String,
    pub follow_up_questions: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub urgency: UrgencyLevel,
    pub disease_info: Option<GuidelineInfo>,
    pub language: LanguageTag,
    /// Set on the normal path only
    pub primary_symptom: Option<SymptomCategory>,
    /// Set on the emergency path only
    pub red_flag: Option<&'static str>,
}

pub struct TriageOrchestrator<M> {
    model: M,
    params: GenerationParams,
    guidelines: GuidelineStore,
    model_timeout: Duration,
}

impl<M: ChatModel> TriageOrchestrator<M> {
    pub fn new(model: M, params: GenerationParams, model_timeout: Duration) -> Self {
        Self { model, params, guidelines: GuidelineStore::builtin(), model_timeout }
    }

    pub async fn triage(&self, utterance: &Utterance) -> Result<TriageReply, TriageError> {
        let text = utterance.text.trim();
        if text.is_empty() {
            return Err(TriageError::EmptyMessage);
        }

        let language = detect_language(text);
        tracing::debug!("Detected language: {}", language);

        if let Some(flag) = scan_red_flags(text) {
            tracing::warn!("Red flag '{}' matched, returning emergency reply", flag.phrase);
            return Ok(emergency_reply(flag, language));
        }

        let assessment = classify_symptoms(text);
        tracing::debug!(
            "Classified symptom: primary={}, related={:?}, urgency={}",
            assessment.primary,
            assessment.related,
            assessment.urgency.as_str()
        );

        let guideline = self.guidelines.lookup(assessment.primary.as_str(), language);
        let prompt = TriagePrompt {
            user_text: text,
            language,
            user_context: utterance.user_context.as_ref(),
            guideline: guideline.as_ref(),
        };
        let request = ChatCompletionRequest::new(&self.params, prompt.messages());

        match self.call_model(&request).await {
            Ok(reply) => Ok(TriageReply {
                reply,
                follow_up_questions: follow_up_questions(assessment.primary, language),
                suggested_actions: suggested_actions(
                    assessment.primary,
                    assessment.urgency,
                    language,
                ),
                urgency: assessment.urgency,
                disease_info: guideline,
                language,
                primary_symptom: Some(assessment.primary),
                red_flag: None,
            }),
            Err(e) => {
                tracing::error!("LLM call failed, using fallback reply: {}", e);
                Ok(fallback_reply(language, assessment.primary))
            },
        }
    }

    async fn call_model(&self, request: &ChatCompletionRequest) -> Result<String, LLMError> {
        match tokio::time::timeout(self.model_timeout, self.model.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(LLMError::Timeout(self.model_timeout.as_secs())),
        }
    }
}

/// Fixed reply naming the matched phrase; the model is never consulted.
pub fn emergency_message(phrase: &str, language: LanguageTag) -> String {
    match language {
        LanguageTag::Ka => format!(
            "თქვენი აღწერიდან არსებობს გადაუდებელი სიმპტომის რისკი ( მაგ., '{}').\n\
             გთხოვთ, დაუყოვნებლივ დარეკოთ 112‑ზე ან მიმართოთ უახლოეს გადაუდებელ განყოფილებას.\n\
             თუ შეგიძლიათ, თან წაიღეთ მიმდინარე მედიკამენტების სია და ალერგიების ინფორმაცია.",
            phrase
        ),
        LanguageTag::Ru => format!(
            "По описанию возможен признак неотложного состояния (напр., '{}').\n\
             Немедленно звоните 112 или обратитесь в ближайшее отделение неотложной помощи.\n\
             Если возможно, возьмите с собой список принимаемых препаратов и аллергий.",
            phrase
        ),
        LanguageTag::En => format!(
            "Your description suggests a possible urgent symptom (e.g., '{}').\n\
             Please call **112** or go to the nearest emergency department **now**.\n\
             If you can, bring a list of your medications and allergies.",
            phrase
        ),
    }
}

/// Apology used when the model call fails or times out.
pub fn fallback_message(language: LanguageTag) -> &'static str {
    match language {
        LanguageTag::Ka => {
            "ვწუხვარ, პასუხის გენერაცია ვერ გამოვიდა. სცადეთ მოგვიანებით.\n\
             ამასობაში, თუ სიმპტომები მძიმდება ან გაქვთ გადაუდებელი მდგომარეობა, დაეკონტაქტთ 112‑ს."
        },
        LanguageTag::Ru => {
            "Извините, не удалось получить ответ. Попробуйте позже.\n\
             Если состояние ухудшается или это неотложная ситуация — звоните 112."
        },
        LanguageTag::En => {
            "Sorry, I couldn’t generate a response right now. Please try again later.\n\
             If your symptoms worsen or you suspect an emergency, call local emergency services (112)."
        },
    }
}

fn emergency_reply(flag: &'static RedFlag, language: LanguageTag) -> TriageReply {
    TriageReply {
        reply: emergency_message(flag.phrase, language),
        follow_up_questions: Vec::new(),
        suggested_actions: emergency_actions(language),
        urgency: UrgencyLevel::Emergency,
        disease_info: None,
        language,
        primary_symptom: None,
        red_flag: Some(flag.phrase),
    }
}

fn fallback_reply(language: LanguageTag, primary: SymptomCategory) -> TriageReply {
    TriageReply {
        reply: fallback_message(language).to_string(),
        follow_up_questions: Vec::new(),
        suggested_actions: Vec::new(),
        urgency: UrgencyLevel::Low,
        disease_info: None,
        language,
        primary_symptom: Some(primary),
        red_flag: None,
    }
}
