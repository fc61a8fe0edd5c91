use serde::{Deserialize, Serialize};

/// Language buckets offered in the voice picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageGroup {
    #[serde(rename = "English")]
    English,
    #[serde(rename = "Spanish (Spain)")]
    SpanishSpain,
}

/// Groups shown when the caller does not ask for the full catalog
pub const DEFAULT_LANGUAGE_GROUPS: &[LanguageGroup] =
    &[LanguageGroup::English, LanguageGroup::SpanishSpain];

impl LanguageGroup {
    pub fn label(&self) -> &'static str {
        match self {
            LanguageGroup::English => "English",
            LanguageGroup::SpanishSpain => "Spanish (Spain)",
        }
    }

    /// Whether a voice with this locale belongs in the group.
    /// English takes every `en-*` locale, Spanish only Spain.
    pub fn accepts(&self, locale: &str) -> bool {
        match self {
            LanguageGroup::English => primary_subtag(locale).eq_ignore_ascii_case("en"),
            LanguageGroup::SpanishSpain => locale.eq_ignore_ascii_case("es-ES"),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        DEFAULT_LANGUAGE_GROUPS
            .iter()
            .copied()
            .find(|group| group.label().eq_ignore_ascii_case(label.trim()))
    }

    /// First group in `groups` accepting `locale`
    pub fn for_locale(locale: &str, groups: &[LanguageGroup]) -> Option<Self> {
        groups.iter().copied().find(|group| group.accepts(locale))
    }
}

impl std::fmt::Display for LanguageGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn primary_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Human-readable language name for a locale ("en-GB" -> "English").
/// Unknown languages keep the locale itself.
pub fn language_name(locale: &str) -> String {
    match primary_subtag(locale).to_lowercase().as_str() {
        "ar" => "Arabic",
        "ca" => "Catalan",
        "cs" => "Czech",
        "da" => "Danish",
        "de" => "German",
        "el" => "Greek",
        "en" => "English",
        "es" => "Spanish",
        "fi" => "Finnish",
        "fr" => "French",
        "he" => "Hebrew",
        "hi" => "Hindi",
        "hu" => "Hungarian",
        "it" => "Italian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "nb" => "Norwegian",
        "nl" => "Dutch",
        "pl" => "Polish",
        "pt" => "Portuguese",
        "ro" => "Romanian",
        "ru" => "Russian",
        "sv" => "Swedish",
        "th" => "Thai",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        "vi" => "Vietnamese",
        "zh" => "Chinese",
        _ => locale,
    }
    .to_string()
}
