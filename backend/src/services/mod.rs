pub mod llm;
pub mod triage;

pub use llm::{ChatModel, OpenAIClient};
pub use triage::TriageOrchestrator;
