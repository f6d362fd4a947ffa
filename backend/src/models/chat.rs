use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::services::triage::{GuidelineInfo, TriageReply, UrgencyLevel, Utterance};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "I have had a headache since this morning")]
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    /// Free-form patient details (age, gender, medical history, ...)
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub user_context: Option<Map<String, Value>>,
}

impl ChatRequest {
    pub fn to_utterance(&self) -> Utterance {
        Utterance { text: self.message.clone(), user_context: self.user_context.clone() }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follow_up_questions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_info: Option<GuidelineInfo>,
}

impl From<TriageReply> for ChatResponse {
    fn from(reply: TriageReply) -> Self {
        Self {
            reply: reply.reply,
            follow_up_questions: reply.follow_up_questions,
            suggested_actions: reply.suggested_actions,
            urgency_level: Some(reply.urgency),
            disease_info: reply.disease_info,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
}
