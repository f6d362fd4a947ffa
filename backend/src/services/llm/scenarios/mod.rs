//! LLM prompt scenarios
//!
//! Each scenario turns domain input into a role-tagged message list.

pub mod language;
pub mod triage;
