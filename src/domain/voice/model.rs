use serde::{Deserialize, Serialize};

/// Synthesis tier of a voice. Neural voices are billed at a higher rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceType {
    Standard,
    Neural,
}

impl VoiceType {
    /// Classify a provider type label ("Neural", "NeuralHD", "Standard", ...)
    pub fn classify(label: &str) -> Self {
        if label.to_lowercase().contains("neural") {
            VoiceType::Neural
        } else {
            VoiceType::Standard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceType::Standard => "Standard",
            VoiceType::Neural => "Neural",
        }
    }
}

impl std::fmt::Display for VoiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A synthetic speaker offered by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Short name passed to synthesis, e.g. "en-US-JennyNeural"
    pub id: String,
    pub display_name: String,
    /// BCP-47 locale, e.g. "en-US"
    pub locale: String,
    pub voice_type: VoiceType,
}

impl Voice {
    pub fn is_neural(&self) -> bool {
        self.voice_type == VoiceType::Neural
    }

    /// Primary language subtag ("en" for "en-US")
    pub fn language_code(&self) -> &str {
        self.locale.split('-').next().unwrap_or(&self.locale)
    }
}
