//! Triage Orchestrator Tests
//!
//! Behaviour of the full rule layer against a recording model stub.

use super::*;
use crate::services::llm::ChatRole;
use crate::tests::common::{StubModel, create_test_orchestrator};

// ============================================================================
// Input validation
// ============================================================================

mod input_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let model = StubModel::replying("unused");
        let orchestrator = create_test_orchestrator(model.clone());

        for text in ["", "   ", "\n\t"] {
            let result = orchestrator.triage(&Utterance::new(text)).await;
            assert_eq!(result, Err(TriageError::EmptyMessage));
        }
        assert_eq!(model.calls(), 0);
    }
}

// ============================================================================
// Emergency path
// ============================================================================

mod emergency_tests {
    use super::*;

    #[tokio::test]
    async fn test_chest_pain_short_circuits() {
        let model = StubModel::replying("unused");
        let orchestrator = create_test_orchestrator(model.clone());

        let reply = orchestrator.triage(&Utterance::new("I have chest pain")).await.unwrap();

        assert_eq!(reply.urgency, UrgencyLevel::Emergency);
        assert_eq!(reply.language, LanguageTag::En);
        assert_eq!(reply.red_flag, Some("chest pain"));
        assert!(reply.reply.contains("chest pain"));
        assert!(reply.reply.contains("112"));
        assert_eq!(
            reply.suggested_actions,
            vec![
                "Call the emergency number 112",
                "Go to the nearest emergency department",
                "Bring a list of your medications and allergies",
            ]
        );
        assert!(reply.follow_up_questions.is_empty());
        assert!(reply.disease_info.is_none());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_every_red_flag_skips_the_model() {
        let model = StubModel::replying("unused");
        let orchestrator = create_test_orchestrator(model.clone());

        for flag in RED_FLAGS {
            let reply = orchestrator
                .triage(&Utterance::new(format!("since yesterday {}", flag.phrase)))
                .await
                .unwrap();
            assert_eq!(reply.urgency, UrgencyLevel::Emergency, "{}", flag.phrase);
            assert!(reply.reply.contains(flag.phrase));
        }
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_emergency_reply_is_localized() {
        let model = StubModel::replying("unused");
        let orchestrator = create_test_orchestrator(model);

        let reply = orchestrator.triage(&Utterance::new("У меня боль в груди")).await.unwrap();
        assert_eq!(reply.language, LanguageTag::Ru);
        assert_eq!(reply.reply, emergency_message("боль в груди", LanguageTag::Ru));
        assert_eq!(reply.suggested_actions, emergency_actions(LanguageTag::Ru));

        let reply = orchestrator.triage(&Utterance::new("მკერდის ტკივილი მაქვს")).await.unwrap();
        assert_eq!(reply.language, LanguageTag::Ka);
        assert!(reply.reply.contains("'მკერდის ტკივილი'"));
    }
}

// ============================================================================
// Normal path
// ============================================================================

mod normal_path_tests {
    use super::*;

    #[tokio::test]
    async fn test_georgian_headache() {
        let model = StubModel::replying("  დაისვენეთ.  ");
        let orchestrator = create_test_orchestrator(model.clone());

        let reply = orchestrator.triage(&Utterance::new("თავის ტკივილი მაქვს")).await.unwrap();

        assert_eq!(reply.language, LanguageTag::Ka);
        assert_eq!(reply.primary_symptom, Some(SymptomCategory::Headache));
        assert_eq!(reply.follow_up_questions.len(), 1);
        assert_eq!(reply.urgency, UrgencyLevel::Low);

        let info = reply.disease_info.expect("headache guideline");
        let expected = GuidelineStore::builtin().lookup("headache", LanguageTag::Ka).unwrap();
        assert_eq!(info.guidance, expected.guidance);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_model_reply_is_merged() {
        let model = StubModel::replying("Drink fluids and rest.");
        let orchestrator = create_test_orchestrator(model.clone());

        let reply = orchestrator.triage(&Utterance::new("I have a severe cough")).await.unwrap();

        assert_eq!(reply.reply, "Drink fluids and rest.");
        assert_eq!(reply.primary_symptom, Some(SymptomCategory::Cough));
        assert_eq!(reply.urgency, UrgencyLevel::Moderate);
        assert_eq!(
            reply.suggested_actions,
            suggested_actions(SymptomCategory::Cough, UrgencyLevel::Moderate, LanguageTag::En)
        );
        assert_eq!(reply.disease_info.unwrap().condition, SymptomCategory::Cough);
    }

    #[tokio::test]
    async fn test_prompt_contains_directive_context_and_guidance() {
        let model = StubModel::replying("ok");
        let orchestrator = create_test_orchestrator(model.clone());

        let mut context = serde_json::Map::new();
        context.insert("age".to_string(), serde_json::json!(30));
        let utterance = Utterance::new("  У меня температура  ").with_context(context);
        orchestrator.triage(&utterance).await.unwrap();

        let request = model.last_request().expect("model was called");
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, 500);
        let contents: Vec<&str> = request.messages.iter().map(|m| m.content.as_str()).collect();
        assert!(contents[1].starts_with("Respond in Russian."));
        assert_eq!(contents[2], r#"Patient context: {"age":30}"#);
        assert!(contents[3].starts_with("Reference guidance for fever: "));
        let last = request.messages.last().unwrap();
        assert_eq!(last.role, ChatRole::User);
        assert_eq!(last.content, "У меня температура");
    }

    #[tokio::test]
    async fn test_unknown_symptom_uses_general_defaults() {
        let model = StubModel::replying("Tell me more.");
        let orchestrator = create_test_orchestrator(model.clone());

        let reply = orchestrator.triage(&Utterance::new("I feel tired")).await.unwrap();

        assert_eq!(reply.primary_symptom, Some(SymptomCategory::General));
        assert!(reply.disease_info.is_none());
        assert_eq!(reply.follow_up_questions.len(), 1);
        assert!(!reply.suggested_actions.is_empty());

        let request = model.last_request().unwrap();
        assert!(!request.messages.iter().any(|m| m.content.starts_with("Reference guidance")));
    }
}

// ============================================================================
// Degraded path
// ============================================================================

mod fallback_tests {
    use super::*;

    #[tokio::test]
    async fn test_model_failure_uses_fallback() {
        let model = StubModel::failing();
        let orchestrator = create_test_orchestrator(model.clone());

        for (text, lang) in [
            ("I have a cough", LanguageTag::En),
            ("მაქვს ხველა", LanguageTag::Ka),
            ("У меня кашель", LanguageTag::Ru),
        ] {
            let reply = orchestrator.triage(&Utterance::new(text)).await.unwrap();
            assert_eq!(reply.reply, fallback_message(lang));
            assert_eq!(reply.urgency, UrgencyLevel::Low);
            assert!(reply.follow_up_questions.is_empty());
            assert!(reply.suggested_actions.is_empty());
        }
        assert_eq!(model.calls(), 3);
    }

    #[tokio::test]
    async fn test_model_timeout_uses_fallback() {
        let model = StubModel::hanging();
        let orchestrator = create_test_orchestrator(model.clone());

        let reply = orchestrator.triage(&Utterance::new("severe stomach ache")).await.unwrap();

        assert_eq!(reply.reply, fallback_message(LanguageTag::En));
        assert_eq!(reply.urgency, UrgencyLevel::Low);
        assert_eq!(model.calls(), 1);
    }
}
