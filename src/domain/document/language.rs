use crate::domain::voice::LanguageGroup;
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

/// Languages the detector distinguishes between. Wider than the offered
/// groups so French or German text is not mistaken for Spanish.
const DETECTABLE_LANGUAGES: &[Language] = &[
    Language::English,
    Language::Spanish,
    Language::French,
    Language::German,
    Language::Italian,
    Language::Portuguese,
];

/// Longest text prefix fed to the detector
const DETECTION_SAMPLE_CHARS: usize = 2000;

pub fn build_language_detector() -> LanguageDetector {
    LanguageDetectorBuilder::from_languages(DETECTABLE_LANGUAGES).build()
}

/// Map a detected language to the voice picker group it should pre-select
pub fn group_for_language(language: Language) -> Option<LanguageGroup> {
    match language {
        Language::English => Some(LanguageGroup::English),
        Language::Spanish => Some(LanguageGroup::SpanishSpain),
        _ => None,
    }
}

pub fn suggest_language(detector: &LanguageDetector, text: &str) -> Option<LanguageGroup> {
    let sample: String = text.chars().take(DETECTION_SAMPLE_CHARS).collect();

    match detector.detect_language_of(sample) {
        Some(language) => group_for_language(language),
        None => {
            tracing::warn!("Could not detect document language");
            None
        }
    }
}
