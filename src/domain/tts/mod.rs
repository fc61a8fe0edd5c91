pub mod chunker;
pub mod cost;
pub mod error;
pub mod preview;
pub mod service;

pub use chunker::{split_into_chunks, DEFAULT_MAX_CHUNK_CHARS};
pub use cost::{estimate_conversion_cost, CostEstimate, Pricing};
pub use error::SpeechServiceError;
pub use preview::{greeting_for, PREVIEW_ARTIFACT};
pub use service::{ChunkGap, ConversionResult, SpeechService, SpeechServiceApi, OUTPUT_ARTIFACT};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when the provider cancels one chunk of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPolicy {
    /// Leave the chunk out and finish the rest, reporting the gap
    Skip,
    /// Fail the whole conversion
    Abort,
}

impl FromStr for GapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(GapPolicy::Skip),
            "abort" => Ok(GapPolicy::Abort),
            other => Err(format!("expected 'skip' or 'abort', got '{}'", other)),
        }
    }
}

/// Request for POST /api/tts/convert and /api/tts/estimate
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    pub voice: String,
}

/// Request for POST /api/tts/preview
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub voice: String,
}
