use crate::domain::voice::Voice;
use async_trait::async_trait;
use std::fmt;

/// Why the provider gave up on a synthesis request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationReason {
    Error,
    EndOfStream,
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CancellationReason::Error => "Error",
            CancellationReason::EndOfStream => "EndOfStream",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationDetails {
    pub reason: CancellationReason,
    pub error_details: Option<String>,
}

impl fmt::Display for CancellationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_details {
            Some(details) => write!(f, "{} ({})", self.reason, details),
            None => write!(f, "{}", self.reason),
        }
    }
}

/// Terminal result of one synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisOutcome {
    /// MP3 bytes for the whole input text
    Completed(Vec<u8>),
    Canceled(CancellationDetails),
}

/// Repository for the remote speech provider.
///
/// Implementations handle the provider's wire format and authentication.
/// A provider-reported cancellation is a successful call returning
/// [`SynthesisOutcome::Canceled`]; `Err` is reserved for failures to reach
/// the provider at all.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// List every voice the provider offers, in provider order
    async fn list_voices(&self) -> Result<Vec<Voice>, String>;

    /// Synthesize one chunk of text with the given voice
    async fn synthesize(&self, voice: &Voice, text: &str) -> Result<SynthesisOutcome, String>;
}
