//! Follow-up questions and suggested actions
//!
//! Lookups fall back from the requested language to English, then to the
//! category-agnostic defaults (again language first, then English). The
//! default tables cover English, so every lookup yields a non-empty list.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::classifier::{SymptomCategory, UrgencyLevel};
use super::language::LanguageTag;

/// At most this many follow-up questions reach the caller.
pub const MAX_FOLLOW_UP_QUESTIONS: usize = 1;

type Phrases = &'static [&'static str];

static FOLLOW_UP_ROWS: &[(SymptomCategory, LanguageTag, Phrases)] = &[
    (
        SymptomCategory::Headache,
        LanguageTag::En,
        &[
            "How long have you had the headache, and how strong is it on a scale of 1 to 10?",
            "Do you also have nausea, sensitivity to light or blurred vision?",
        ],
    ),
    (
        SymptomCategory::Headache,
        LanguageTag::Ka,
        &[
            "რამდენი ხანია გტკივათ თავი და რამდენად ძლიერია ტკივილი 1-დან 10-მდე სკალაზე?",
            "გაქვთ თუ არა გულისრევა, სინათლისადმი მგრძნობელობა ან მხედველობის დაბინდვა?",
        ],
    ),
    (
        SymptomCategory::Headache,
        LanguageTag::Ru,
        &[
            "Как долго у вас болит голова и насколько сильно по шкале от 1 до 10?",
            "Есть ли тошнота, светобоязнь или нечёткость зрения?",
        ],
    ),
    (
        SymptomCategory::Fever,
        LanguageTag::En,
        &["What is your highest measured temperature, and for how many days have you had it?"],
    ),
    (
        SymptomCategory::Fever,
        LanguageTag::Ka,
        &["რა იყო ყველაზე მაღალი გაზომილი ტემპერატურა და რამდენი დღეა, რაც სიცხე გაქვთ?"],
    ),
    (
        SymptomCategory::Fever,
        LanguageTag::Ru,
        &["Какая была максимальная измеренная температура и сколько дней она держится?"],
    ),
    (
        SymptomCategory::Cough,
        LanguageTag::En,
        &[
            "Is the cough dry or are you coughing up mucus, and how long has it lasted?",
            "Do you smoke?",
        ],
    ),
    (
        SymptomCategory::Cough,
        LanguageTag::Ka,
        &["მშრალი ხველა გაქვთ თუ ნახველით, და რამდენი ხანია გაწუხებთ?"],
    ),
    (
        SymptomCategory::Cough,
        LanguageTag::Ru,
        &["Кашель сухой или с мокротой, и как долго он продолжается?"],
    ),
    (
        SymptomCategory::Cold,
        LanguageTag::En,
        &["When did the symptoms start, and do you also have a fever?"],
    ),
    (
        SymptomCategory::Cold,
        LanguageTag::Ka,
        &["როდის დაიწყო სიმპტომები და გაქვთ თუ არა სიცხეც?"],
    ),
    (
        SymptomCategory::Cold,
        LanguageTag::Ru,
        &["Когда начались симптомы и есть ли у вас температура?"],
    ),
    (
        SymptomCategory::StomachPain,
        LanguageTag::En,
        &[
            "Where exactly is the pain, and is it constant or does it come in waves?",
            "Have you had vomiting or diarrhea?",
        ],
    ),
    (
        SymptomCategory::StomachPain,
        LanguageTag::Ka,
        &["კონკრეტულად სად გტკივათ და ტკივილი მუდმივია თუ ტალღისებური?"],
    ),
    (
        SymptomCategory::StomachPain,
        LanguageTag::Ru,
        &["Где именно болит, и боль постоянная или приступообразная?"],
    ),
];

static DEFAULT_FOLLOW_UP_ROWS: &[(LanguageTag, Phrases)] = &[
    (
        LanguageTag::En,
        &["Could you describe your symptoms in more detail: when did they start and how severe are they?"],
    ),
    (
        LanguageTag::Ka,
        &["შეგიძლიათ უფრო დეტალურად აღწეროთ სიმპტომები: როდის დაიწყო და რამდენად ძლიერია?"],
    ),
    (
        LanguageTag::Ru,
        &["Опишите, пожалуйста, симптомы подробнее: когда они начались и насколько выражены?"],
    ),
];

static ACTION_ROWS: &[(SymptomCategory, UrgencyLevel, LanguageTag, Phrases)] = &[
    (
        SymptomCategory::Headache,
        UrgencyLevel::Low,
        LanguageTag::En,
        &["Rest in a quiet, dark room", "Drink enough water", "Limit screen time"],
    ),
    (
        SymptomCategory::Headache,
        UrgencyLevel::Low,
        LanguageTag::Ka,
        &["დაისვენეთ მშვიდ, ბნელ ოთახში", "დალიეთ საკმარისი წყალი", "შეზღუდეთ ეკრანთან დრო"],
    ),
    (
        SymptomCategory::Headache,
        UrgencyLevel::Low,
        LanguageTag::Ru,
        &["Отдохните в тихой тёмной комнате", "Пейте достаточно воды", "Ограничьте время у экрана"],
    ),
    (
        SymptomCategory::Headache,
        UrgencyLevel::Moderate,
        LanguageTag::En,
        &["Book a visit with your doctor today", "Track when the pain starts and how long it lasts"],
    ),
    (
        SymptomCategory::Headache,
        UrgencyLevel::Moderate,
        LanguageTag::Ka,
        &["დღესვე ჩაეწერეთ ექიმთან", "ჩაიწერეთ, როდის იწყება ტკივილი და რამდენ ხანს გრძელდება"],
    ),
    (
        SymptomCategory::Headache,
        UrgencyLevel::Moderate,
        LanguageTag::Ru,
        &["Запишитесь к врачу сегодня", "Отмечайте, когда начинается боль и сколько длится"],
    ),
    (
        SymptomCategory::Fever,
        UrgencyLevel::Low,
        LanguageTag::En,
        &["Drink plenty of fluids", "Measure your temperature every 4-6 hours", "Rest"],
    ),
    (
        SymptomCategory::Fever,
        UrgencyLevel::Low,
        LanguageTag::Ka,
        &["მიიღეთ ბევრი სითხე", "გაიზომეთ ტემპერატურა ყოველ 4-6 საათში", "დაისვენეთ"],
    ),
    (
        SymptomCategory::Fever,
        UrgencyLevel::Low,
        LanguageTag::Ru,
        &["Пейте больше жидкости", "Измеряйте температуру каждые 4-6 часов", "Отдыхайте"],
    ),
    (
        SymptomCategory::Fever,
        UrgencyLevel::Moderate,
        LanguageTag::En,
        &["Contact your doctor today", "Take an antipyretic if you have no contraindications"],
    ),
    (
        SymptomCategory::Fever,
        UrgencyLevel::Moderate,
        LanguageTag::Ka,
        &["დღესვე დაუკავშირდით ექიმს", "მიიღეთ სიცხის დამწევი, თუ უკუჩვენება არ გაქვთ"],
    ),
    (
        SymptomCategory::Fever,
        UrgencyLevel::Moderate,
        LanguageTag::Ru,
        &["Свяжитесь с врачом сегодня", "Примите жаропонижающее при отсутствии противопоказаний"],
    ),
    (
        SymptomCategory::Cough,
        UrgencyLevel::Low,
        LanguageTag::En,
        &["Drink warm fluids", "Keep the air humidified", "Avoid smoke"],
    ),
    (
        SymptomCategory::Cough,
        UrgencyLevel::Low,
        LanguageTag::Ka,
        &["სვით თბილი სასმელი", "დაატენიანეთ ჰაერი", "მოერიდეთ კვამლს"],
    ),
    (
        SymptomCategory::Cough,
        UrgencyLevel::Low,
        LanguageTag::Ru,
        &["Пейте тёплое", "Увлажняйте воздух", "Избегайте дыма"],
    ),
    (
        SymptomCategory::Cough,
        UrgencyLevel::Moderate,
        LanguageTag::En,
        &["See a doctor within 24 hours", "Watch for breathing difficulty"],
    ),
    (
        SymptomCategory::Cough,
        UrgencyLevel::Moderate,
        LanguageTag::Ka,
        &["24 საათში მიმართეთ ექიმს", "დააკვირდით, ხომ არ გიჭირთ სუნთქვა"],
    ),
    (
        SymptomCategory::Cough,
        UrgencyLevel::Moderate,
        LanguageTag::Ru,
        &["Обратитесь к врачу в течение 24 часов", "Следите, не затруднено ли дыхание"],
    ),
    (
        SymptomCategory::Cold,
        UrgencyLevel::Low,
        LanguageTag::En,
        &["Rest and drink fluids", "Rinse your nose with saline"],
    ),
    (
        SymptomCategory::Cold,
        UrgencyLevel::Low,
        LanguageTag::Ka,
        &["დაისვენეთ და მიიღეთ სითხე", "ცხვირი გამოირეცხეთ ფიზიოლოგიური ხსნარით"],
    ),
    (
        SymptomCategory::Cold,
        UrgencyLevel::Low,
        LanguageTag::Ru,
        &["Отдыхайте и пейте жидкость", "Промывайте нос солевым раствором"],
    ),
    (
        SymptomCategory::Cold,
        UrgencyLevel::Moderate,
        LanguageTag::En,
        &["Contact your doctor if symptoms do not improve in 2-3 days"],
    ),
    (
        SymptomCategory::Cold,
        UrgencyLevel::Moderate,
        LanguageTag::Ka,
        &["მიმართეთ ექიმს, თუ 2-3 დღეში არ გაუმჯობესდება"],
    ),
    (
        SymptomCategory::Cold,
        UrgencyLevel::Moderate,
        LanguageTag::Ru,
        &["Обратитесь к врачу, если за 2-3 дня не станет лучше"],
    ),
    (
        SymptomCategory::StomachPain,
        UrgencyLevel::Low,
        LanguageTag::En,
        &["Sip clear fluids", "Eat light, bland food", "Avoid alcohol and fatty meals"],
    ),
    (
        SymptomCategory::StomachPain,
        UrgencyLevel::Low,
        LanguageTag::Ka,
        &["ნელ-ნელა სვით სითხე", "მიირთვით მსუბუქი საკვები", "მოერიდეთ ალკოჰოლს და ცხიმიან საკვებს"],
    ),
    (
        SymptomCategory::StomachPain,
        UrgencyLevel::Low,
        LanguageTag::Ru,
        &["Пейте жидкость маленькими глотками", "Ешьте лёгкую пищу", "Избегайте алкоголя и жирного"],
    ),
    (
        SymptomCategory::StomachPain,
        UrgencyLevel::Moderate,
        LanguageTag::En,
        &["See a doctor today", "Do not eat until you have been examined"],
    ),
    (
        SymptomCategory::StomachPain,
        UrgencyLevel::Moderate,
        LanguageTag::Ka,
        &["დღესვე მიმართეთ ექიმს", "გასინჯვამდე ნუ მიირთმევთ საკვებს"],
    ),
    (
        SymptomCategory::StomachPain,
        UrgencyLevel::Moderate,
        LanguageTag::Ru,
        &["Обратитесь к врачу сегодня", "Не ешьте до осмотра"],
    ),
];

static DEFAULT_ACTION_ROWS: &[(LanguageTag, Phrases)] = &[
    (
        LanguageTag::En,
        &["Monitor your symptoms", "Contact your doctor if they get worse"],
    ),
    (
        LanguageTag::Ka,
        &["დააკვირდით სიმპტომებს", "თუ გაუარესდება, დაუკავშირდით ექიმს"],
    ),
    (
        LanguageTag::Ru,
        &["Следите за симптомами", "Обратитесь к врачу, если станет хуже"],
    ),
];

static EMERGENCY_ACTION_ROWS: &[(LanguageTag, Phrases)] = &[
    (
        LanguageTag::En,
        &[
            "Call the emergency number 112",
            "Go to the nearest emergency department",
            "Bring a list of your medications and allergies",
        ],
    ),
    (
        LanguageTag::Ka,
        &[
            "დარეკეთ გადაუდებელ ნომერზე 112",
            "მიმართეთ უახლოეს გადაუდებელ განყოფილებას",
            "თან წაიღეთ მედიკამენტებისა და ალერგიების სია",
        ],
    ),
    (
        LanguageTag::Ru,
        &[
            "Позвоните по номеру экстренной помощи 112",
            "Обратитесь в ближайшее отделение неотложной помощи",
            "Возьмите список лекарств и аллергий",
        ],
    ),
];

static FOLLOW_UPS: Lazy<HashMap<(SymptomCategory, LanguageTag), Phrases>> =
    Lazy::new(|| FOLLOW_UP_ROWS.iter().map(|&(c, l, q)| ((c, l), q)).collect());

static ACTIONS: Lazy<HashMap<(SymptomCategory, UrgencyLevel, LanguageTag), Phrases>> =
    Lazy::new(|| ACTION_ROWS.iter().map(|&(c, u, l, a)| ((c, u, l), a)).collect());

fn by_language(rows: &[(LanguageTag, Phrases)], lang: LanguageTag) -> Option<Phrases> {
    rows.iter().find(|(l, _)| *l == lang).map(|&(_, phrases)| phrases)
}

fn with_default(
    specific: impl Fn(LanguageTag) -> Option<Phrases>,
    defaults: &[(LanguageTag, Phrases)],
    lang: LanguageTag,
) -> Phrases {
    specific(lang)
        .or_else(|| specific(LanguageTag::En))
        .or_else(|| by_language(defaults, lang))
        .or_else(|| by_language(defaults, LanguageTag::En))
        .unwrap_or(&[])
}

fn to_strings(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|s| s.to_string()).collect()
}

/// Follow-up questions for a category, trimmed to a single question.
pub fn follow_up_questions(category: SymptomCategory, lang: LanguageTag) -> Vec<String> {
    let questions =
        with_default(|l| FOLLOW_UPS.get(&(category, l)).copied(), DEFAULT_FOLLOW_UP_ROWS, lang);
    to_strings(&questions[..questions.len().min(MAX_FOLLOW_UP_QUESTIONS)])
}

pub fn suggested_actions(
    category: SymptomCategory,
    urgency: UrgencyLevel,
    lang: LanguageTag,
) -> Vec<String> {
    to_strings(with_default(
        |l| ACTIONS.get(&(category, urgency, l)).copied(),
        DEFAULT_ACTION_ROWS,
        lang,
    ))
}

/// Fixed action triple for the red-flag path: call 112, go to the emergency
/// department, bring the medication list.
pub fn emergency_actions(lang: LanguageTag) -> Vec<String> {
    to_strings(
        by_language(EMERGENCY_ACTION_ROWS, lang)
            .or_else(|| by_language(EMERGENCY_ACTION_ROWS, LanguageTag::En))
            .unwrap_or(&[]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGS: [LanguageTag; 3] = [LanguageTag::En, LanguageTag::Ka, LanguageTag::Ru];
    const CATEGORIES: [SymptomCategory; 6] = [
        SymptomCategory::Headache,
        SymptomCategory::Fever,
        SymptomCategory::Cough,
        SymptomCategory::Cold,
        SymptomCategory::StomachPain,
        SymptomCategory::General,
    ];

    #[test]
    fn test_follow_ups_never_exceed_one() {
        for category in CATEGORIES {
            for lang in LANGS {
                let questions = follow_up_questions(category, lang);
                assert_eq!(questions.len(), 1, "{category}/{lang}");
            }
        }
    }

    #[test]
    fn test_follow_ups_trim_longer_lists() {
        let questions = follow_up_questions(SymptomCategory::Headache, LanguageTag::En);
        assert_eq!(
            questions,
            vec!["How long have you had the headache, and how strong is it on a scale of 1 to 10?"]
        );
    }

    #[test]
    fn test_general_uses_localized_defaults() {
        let questions = follow_up_questions(SymptomCategory::General, LanguageTag::Ru);
        assert!(questions[0].starts_with("Опишите"));

        let actions =
            suggested_actions(SymptomCategory::General, UrgencyLevel::Moderate, LanguageTag::Ka);
        assert_eq!(actions, vec!["დააკვირდით სიმპტომებს", "თუ გაუარესდება, დაუკავშირდით ექიმს"]);
    }

    #[test]
    fn test_actions_depend_on_urgency() {
        let low = suggested_actions(SymptomCategory::Fever, UrgencyLevel::Low, LanguageTag::En);
        let moderate =
            suggested_actions(SymptomCategory::Fever, UrgencyLevel::Moderate, LanguageTag::En);
        assert_eq!(low.len(), 3);
        assert_ne!(low, moderate);
    }

    #[test]
    fn test_unlisted_urgency_falls_back_to_defaults() {
        let actions = suggested_actions(SymptomCategory::Cough, UrgencyLevel::High, LanguageTag::En);
        assert_eq!(actions, vec!["Monitor your symptoms", "Contact your doctor if they get worse"]);
    }

    #[test]
    fn test_actions_never_empty() {
        for category in CATEGORIES {
            for urgency in [UrgencyLevel::Low, UrgencyLevel::Moderate, UrgencyLevel::High] {
                for lang in LANGS {
                    assert!(!suggested_actions(category, urgency, lang).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_emergency_actions_triple() {
        for lang in LANGS {
            assert_eq!(emergency_actions(lang).len(), 3);
        }
        let en = emergency_actions(LanguageTag::En);
        assert!(en[0].contains("112"));
        assert!(en[1].contains("emergency department"));
        assert!(en[2].contains("medications"));
    }
}
