//! LLM Service Module
//!
//! Thin client layer over an OpenAI-compatible chat completion API.
//! The triage orchestrator only depends on the [`ChatModel`] trait, so tests
//! and alternative providers can be plugged in without network access.
//!
//! # Architecture
//! ```text
//! ┌─────────────────┐
//! │   ChatModel     │  ← Trait (generic interface)
//! └────────┬────────┘
//!          │
//!    ┌─────┴─────┐
//!    ▼           ▼
//! ┌──────┐  ┌──────────┐
//! │OpenAI│  │  Test    │
//! │Client│  │  Stubs   │
//! └──────┘  └──────────┘
//! ```

mod client;
mod models;
pub mod scenarios;

pub use client::OpenAIClient;
pub use models::*;

use async_trait::async_trait;
use std::sync::Arc;

/// A language model that turns a role-tagged prompt into text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, LLMError>;
}

#[async_trait]
impl<T: ChatModel + ?Sized> ChatModel for Arc<T> {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, LLMError> {
        (**self).complete(request).await
    }
}
