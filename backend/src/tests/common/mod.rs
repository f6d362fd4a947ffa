// Common test utilities and helpers

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::AppState;
use crate::services::llm::{ChatCompletionRequest, ChatModel, GenerationParams, LLMError};
use crate::services::triage::TriageOrchestrator;

/// How the stub answers a completion call
#[derive(Debug, Clone)]
pub enum StubBehavior {
    Reply(String),
    Fail,
    Hang,
}

/// Recording `ChatModel` stub: counts calls and keeps the last request.
pub struct StubModel {
    behavior: StubBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatCompletionRequest>>,
}

impl StubModel {
    pub fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self { behavior, calls: AtomicUsize::new(0), last_request: Mutex::new(None) })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(StubBehavior::Reply(text.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(StubBehavior::Fail)
    }

    pub fn hanging() -> Arc<Self> {
        Self::new(StubBehavior::Hang)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.behavior {
            StubBehavior::Reply(text) => Ok(text.clone()),
            StubBehavior::Fail => Err(LLMError::ApiError("HTTP 401: invalid api key".to_string())),
            StubBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("too late".to_string())
            },
        }
    }
}

/// Orchestrator with default generation params and a short model timeout
pub fn create_test_orchestrator(model: Arc<StubModel>) -> TriageOrchestrator<Arc<StubModel>> {
    TriageOrchestrator::new(model, GenerationParams::default(), Duration::from_millis(200))
}

/// Application state backed by the given stub
pub fn create_test_state(model: Arc<StubModel>) -> Arc<AppState> {
    let model: Arc<dyn ChatModel> = model;
    Arc::new(AppState {
        orchestrator: TriageOrchestrator::new(
            model,
            GenerationParams::default(),
            Duration::from_millis(200),
        ),
    })
}
