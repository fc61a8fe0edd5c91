pub mod azure_speech_repository;
pub mod speech_repository;

pub use azure_speech_repository::AzureSpeechRepository;
pub use speech_repository::{
    CancellationDetails, CancellationReason, SpeechRepository, SynthesisOutcome,
};
