use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("voice not found in catalog: {0}")]
    VoiceNotFound(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("speech synthesis canceled for chunk {index}: {reason}")]
    Canceled { index: usize, reason: String },
    #[error("speech synthesis canceled for all {chunk_count} chunks")]
    AllChunksCanceled { chunk_count: usize },
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("artifact i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::VoiceNotFound(id) => {
                AppError::BadRequest(format!("Unknown voice: {}", id))
            }
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            err @ (SpeechServiceError::Canceled { .. }
            | SpeechServiceError::AllChunksCanceled { .. }) => {
                AppError::ExternalService(format!(
                    "{}. Did you set the correct API key and region?",
                    err
                ))
            }
            SpeechServiceError::Dependency(msg) => AppError::ExternalService(msg),
            SpeechServiceError::Io(e) => AppError::Internal(e.to_string()),
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
