//! Static self-care guidelines per symptom category
//!
//! The table is a process-wide constant. The red-flag descriptions here are
//! shown to the user and are not used for emergency scanning.

use serde::Serialize;
use utoipa::ToSchema;

use super::classifier::SymptomCategory;
use super::language::LanguageTag;

/// Immutable guideline record for one category.
#[derive(Debug)]
pub struct GuidelineEntry {
    pub category: SymptomCategory,
    pub keywords: &'static [&'static str],
    pub guidance: &'static [(LanguageTag, &'static str)],
    pub red_flags: &'static [&'static str],
}

impl GuidelineEntry {
    fn matches(&self, token: &str) -> bool {
        let keywords: &[&str] = self.keywords;
        self.category.as_str() == token || keywords.contains(&token)
    }

    /// Guidance in the requested language, falling back to English.
    pub fn guidance_for(&self, lang: LanguageTag) -> Option<&'static str> {
        let find = |wanted: LanguageTag| {
            self.guidance.iter().find(|(l, _)| *l == wanted).map(|(_, text)| *text)
        };
        find(lang).or_else(|| find(LanguageTag::En))
    }
}

/// Resolved guideline, serialized as `disease_info` in chat responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GuidelineInfo {
    pub condition: SymptomCategory,
    pub guidance: String,
    pub red_flags: Vec<String>,
}

/// Read-only lookup over a guideline table.
#[derive(Debug, Clone, Copy)]
pub struct GuidelineStore {
    entries: &'static [GuidelineEntry],
}

impl Default for GuidelineStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GuidelineStore {
    pub const fn new(entries: &'static [GuidelineEntry]) -> Self {
        Self { entries }
    }

    pub const fn builtin() -> Self {
        Self::new(GUIDELINES)
    }

    /// Find the entry whose category name or keyword list matches `token`.
    pub fn lookup(&self, token: &str, lang: LanguageTag) -> Option<GuidelineInfo> {
        let token = token.trim().to_lowercase();
        let entry = self.entries.iter().find(|e| e.matches(&token))?;
        let guidance = entry.guidance_for(lang)?;

        Some(GuidelineInfo {
            condition: entry.category,
            guidance: guidance.to_string(),
            red_flags: entry.red_flags.iter().map(|s| s.to_string()).collect(),
        })
    }
}

pub static GUIDELINES: &[GuidelineEntry] = &[
    GuidelineEntry {
        category: SymptomCategory::Headache,
        keywords: SymptomCategory::Headache.keywords(),
        guidance: &[
            (
                LanguageTag::En,
                "Rest in a quiet, dark room, drink water and avoid screens. An over-the-counter \
                 pain reliever such as paracetamol may help if you have no contraindications.",
            ),
            (
                LanguageTag::Ka,
                "დაისვენეთ მშვიდ, ჩაბნელებულ ოთახში, დალიეთ წყალი და მოერიდეთ ეკრანებს. \
                 თუ უკუჩვენება არ გაქვთ, შეიძლება დაგეხმაროთ ურეცეპტო ტკივილგამაყუჩებელი, მაგ. პარაცეტამოლი.",
            ),
            (
                LanguageTag::Ru,
                "Отдохните в тихой затемнённой комнате, пейте воду и избегайте экранов. \
                 При отсутствии противопоказаний может помочь безрецептурное обезболивающее, например парацетамол.",
            ),
        ],
        red_flags: &[
            "Sudden, worst-ever headache",
            "Headache with stiff neck and fever",
            "Headache with weakness, confusion or trouble speaking",
            "Headache after a head injury",
        ],
    },
    GuidelineEntry {
        category: SymptomCategory::Fever,
        keywords: SymptomCategory::Fever.keywords(),
        guidance: &[
            (
                LanguageTag::En,
                "Drink plenty of fluids, rest and dress lightly. Paracetamol or ibuprofen can \
                 lower the temperature. Measure it regularly and note the readings.",
            ),
            (
                LanguageTag::Ka,
                "მიიღეთ ბევრი სითხე, დაისვენეთ და ჩაიცვით მსუბუქად. ტემპერატურის დასაწევად \
                 შეიძლება პარაცეტამოლი ან იბუპროფენი. რეგულარულად გაიზომეთ და ჩაიწერეთ მაჩვენებლები.",
            ),
            (
                LanguageTag::Ru,
                "Пейте больше жидкости, отдыхайте и одевайтесь легко. Парацетамол или ибупрофен \
                 помогут снизить температуру. Регулярно измеряйте её и записывайте показатели.",
            ),
        ],
        red_flags: &[
            "Temperature above 39.5°C or lasting more than 3 days",
            "Fever with rash that does not fade under pressure",
            "Fever with confusion, stiff neck or difficulty breathing",
        ],
    },
    GuidelineEntry {
        category: SymptomCategory::Cough,
        keywords: SymptomCategory::Cough.keywords(),
        guidance: &[
            (
                LanguageTag::En,
                "Warm drinks, honey (not for children under 1 year) and humidified air can ease \
                 a cough. Avoid smoke and rest your voice.",
            ),
            (
                LanguageTag::Ka,
                "ხველას შეიძლება შეუმსუბუქოს თბილმა სასმელმა, თაფლმა (არა 1 წლამდე ბავშვებისთვის) \
                 და დატენიანებულმა ჰაერმა. მოერიდეთ კვამლს.",
            ),
            (
                LanguageTag::Ru,
                "Тёплое питьё, мёд (не для детей до 1 года) и увлажнённый воздух облегчают кашель. \
                 Избегайте дыма.",
            ),
        ],
        red_flags: &[
            "Coughing up blood",
            "Cough with difficulty breathing or chest pain",
            "Cough lasting more than 3 weeks",
        ],
    },
    GuidelineEntry {
        category: SymptomCategory::Cold,
        keywords: SymptomCategory::Cold.keywords(),
        guidance: &[
            (
                LanguageTag::En,
                "Colds usually pass within 7 to 10 days. Rest, drink fluids, rinse your nose with \
                 saline and gargle with warm salt water for a sore throat.",
            ),
            (
                LanguageTag::Ka,
                "გაციება ჩვეულებრივ 7-10 დღეში გადის. დაისვენეთ, მიიღეთ სითხე, ცხვირი გამოირეცხეთ \
                 ფიზიოლოგიური ხსნარით, ყელის ტკივილისას გამოივლეთ თბილი მარილიანი წყლით.",
            ),
            (
                LanguageTag::Ru,
                "Простуда обычно проходит за 7–10 дней. Отдыхайте, пейте жидкость, промывайте нос \
                 солевым раствором, при боли в горле полощите тёплой солёной водой.",
            ),
        ],
        red_flags: &[
            "Symptoms lasting more than 10 days or getting worse",
            "High fever with severe sore throat",
            "Ear pain or facial pain with swelling",
        ],
    },
    GuidelineEntry {
        category: SymptomCategory::StomachPain,
        keywords: SymptomCategory::StomachPain.keywords(),
        guidance: &[
            (
                LanguageTag::En,
                "Sip clear fluids, eat light bland food and avoid alcohol, coffee and fatty meals. \
                 A warm compress may ease cramping.",
            ),
            (
                LanguageTag::Ka,
                "ნელ-ნელა სვით გამჭვირვალე სითხე, მიირთვით მსუბუქი საკვები და მოერიდეთ ალკოჰოლს, \
                 ყავას და ცხიმიან საჭმელს. სპაზმს შეიძლება თბილი კომპრესი უშველოს.",
            ),
            (
                LanguageTag::Ru,
                "Пейте небольшими глотками прозрачную жидкость, ешьте лёгкую пищу, избегайте \
                 алкоголя, кофе и жирного. Тёплый компресс может облегчить спазмы.",
            ),
        ],
        red_flags: &[
            "Severe or constant pain, especially in the lower right abdomen",
            "Vomiting blood or black, tarry stools",
            "Hard, rigid belly or pain with high fever",
        ],
    },
];
