use crate::domain::voice::VoiceType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const CHARACTERS_PER_MILLION: u32 = 1_000_000;

/// Provider rates in USD per million characters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub neural_per_million: Decimal,
    pub standard_per_million: Decimal,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            neural_per_million: Decimal::from(16),
            standard_per_million: Decimal::from(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub characters: usize,
    /// USD
    pub cost: Decimal,
    pub voice_type: VoiceType,
}

impl Pricing {
    /// Per-character rate for a voice type label. Anything mentioning
    /// "neural" (case-insensitive) is billed as neural.
    pub fn rate(&self, voice_type_label: &str) -> Decimal {
        self.per_million(VoiceType::classify(voice_type_label)) / Decimal::from(CHARACTERS_PER_MILLION)
    }

    pub fn estimate(&self, text: &str, voice_type_label: &str) -> CostEstimate {
        let voice_type = VoiceType::classify(voice_type_label);
        let characters = text.chars().count();
        let cost = Decimal::from(characters) * self.per_million(voice_type)
            / Decimal::from(CHARACTERS_PER_MILLION);

        CostEstimate {
            characters,
            cost,
            voice_type,
        }
    }

    fn per_million(&self, voice_type: VoiceType) -> Decimal {
        match voice_type {
            VoiceType::Neural => self.neural_per_million,
            VoiceType::Standard => self.standard_per_million,
        }
    }
}

/// Estimate with the provider's list prices ($16 neural, $4 standard per 1M chars)
pub fn estimate_conversion_cost(text: &str, voice_type_label: &str) -> CostEstimate {
    Pricing::default().estimate(text, voice_type_label)
}
