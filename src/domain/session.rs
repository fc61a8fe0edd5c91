use crate::domain::tts::SpeechServiceError;
use crate::domain::voice::VoiceCatalog;
use crate::infrastructure::config::SpeechSecrets;
use crate::infrastructure::repositories::SpeechRepository;

/// Configuration and voice catalog for one running session.
///
/// Built once at startup and shared read-only with every component.
#[derive(Debug, Clone)]
pub struct SpeechSession {
    secrets: SpeechSecrets,
    catalog: VoiceCatalog,
}

impl SpeechSession {
    pub fn new(secrets: SpeechSecrets, catalog: VoiceCatalog) -> Self {
        Self { secrets, catalog }
    }

    /// Fetch the voice catalog from the provider and open the session
    pub async fn start(
        secrets: SpeechSecrets,
        speech_repo: &dyn SpeechRepository,
    ) -> Result<Self, SpeechServiceError> {
        let voices = speech_repo
            .list_voices()
            .await
            .map_err(SpeechServiceError::Dependency)?;

        tracing::info!(
            region = %secrets.region,
            voice_count = voices.len(),
            "Voice catalog fetched"
        );

        Ok(Self::new(secrets, VoiceCatalog::new(voices)))
    }

    pub fn region(&self) -> &str {
        &self.secrets.region
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }
}
