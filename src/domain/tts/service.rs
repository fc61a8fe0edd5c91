use super::chunker::split_into_chunks;
use super::cost::{CostEstimate, Pricing};
use super::error::SpeechServiceError;
use super::preview::{greeting_for, PREVIEW_ARTIFACT};
use super::GapPolicy;
use crate::domain::session::SpeechSession;
use crate::domain::voice::Voice;
use crate::infrastructure::repositories::{SpeechRepository, SynthesisOutcome};
use crate::infrastructure::storage::ArtifactStore;
use async_trait::async_trait;
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Final artifact name of a conversion, also offered as the download name
pub const OUTPUT_ARTIFACT: &str = "output.mp3";

/// A chunk the provider canceled, left out of the final artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkGap {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub request_id: Uuid,
    pub artifact_path: PathBuf,
    pub audio: Vec<u8>,
    pub chunk_count: usize,
    pub gaps: Vec<ChunkGap>,
    pub estimate: CostEstimate,
}

impl ConversionResult {
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }
}

pub struct SpeechService {
    session: Arc<SpeechSession>,
    speech_repo: Arc<dyn SpeechRepository>,
    artifacts: ArtifactStore,
    max_chunk_chars: usize,
    pricing: Pricing,
    gap_policy: GapPolicy,
    preview_cache: Option<Cache<String, Vec<u8>>>,
}

impl SpeechService {
    pub fn new(
        session: Arc<SpeechSession>,
        speech_repo: Arc<dyn SpeechRepository>,
        artifacts: ArtifactStore,
        max_chunk_chars: usize,
        pricing: Pricing,
        gap_policy: GapPolicy,
        preview_cache_enabled: bool,
    ) -> Self {
        // Previews are a fixed sentence per voice, so the audio can be reused
        let preview_cache = if preview_cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(200)
                    .time_to_idle(Duration::from_secs(30 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            session,
            speech_repo,
            artifacts,
            max_chunk_chars,
            pricing,
            gap_policy,
            preview_cache,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Price a conversion without synthesizing anything
    fn estimate(&self, text: &str, voice_id: &str) -> Result<CostEstimate, SpeechServiceError>;

    /// Convert text to one MP3 artifact.
    ///
    /// This operation:
    /// - Resolves the voice against the session catalog
    /// - Splits the text into chunks and synthesizes them in order
    /// - Concatenates the per-chunk audio into `output.mp3`
    async fn convert(
        &self,
        text: &str,
        voice_id: &str,
    ) -> Result<ConversionResult, SpeechServiceError>;

    /// Synthesize a short greeting with the voice, for immediate playback
    async fn preview(&self, voice_id: &str) -> Result<Vec<u8>, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    fn estimate(&self, text: &str, voice_id: &str) -> Result<CostEstimate, SpeechServiceError> {
        let voice = self.find_voice(voice_id)?;
        Ok(self.pricing.estimate(text, voice.voice_type.as_str()))
    }

    async fn convert(
        &self,
        text: &str,
        voice_id: &str,
    ) -> Result<ConversionResult, SpeechServiceError> {
        let voice = self.find_voice(voice_id)?.clone();
        self.synthesize_to_artifact(text, &voice, OUTPUT_ARTIFACT).await
    }

    async fn preview(&self, voice_id: &str) -> Result<Vec<u8>, SpeechServiceError> {
        let voice = self.find_voice(voice_id)?.clone();

        if let Some(cache) = &self.preview_cache {
            if let Some(audio) = cache.get(&voice.id).await {
                tracing::info!(voice = %voice.id, "Preview cache hit");
                return Ok(audio);
            }
        }

        let greeting = greeting_for(&voice);
        let result = self
            .synthesize_to_artifact(&greeting, &voice, PREVIEW_ARTIFACT)
            .await?;

        if let Some(cache) = &self.preview_cache {
            if result.is_complete() {
                cache.insert(voice.id.clone(), result.audio.clone()).await;
            }
        }

        Ok(result.audio)
    }
}

impl SpeechService {
    /// Only voices from the session catalog may reach the provider
    fn find_voice(&self, voice_id: &str) -> Result<&Voice, SpeechServiceError> {
        self.session
            .catalog()
            .find(voice_id)
            .ok_or_else(|| SpeechServiceError::VoiceNotFound(voice_id.to_string()))
    }

    async fn synthesize_to_artifact(
        &self,
        text: &str,
        voice: &Voice,
        artifact_name: &str,
    ) -> Result<ConversionResult, SpeechServiceError> {
        let start_time = std::time::Instant::now();
        let request_id = Uuid::new_v4();

        // 1. Chunking
        let chunks = split_into_chunks(text, self.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        let estimate = self.pricing.estimate(text, voice.voice_type.as_str());

        tracing::info!(
            request_id = %request_id,
            voice = %voice.id,
            chunk_count = chunks.len(),
            characters = estimate.characters,
            "Text split into chunks"
        );

        let artifacts = self.artifacts.open_request(request_id).await?;

        // 2. Synthesizing, strictly one chunk after another
        let mut written = Vec::with_capacity(chunks.len());
        let mut gaps = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            tracing::info!(
                request_id = %request_id,
                chunk_index = index,
                chunk_size = chunk.chars().count(),
                "Synthesizing chunk"
            );

            let outcome = self
                .speech_repo
                .synthesize(voice, chunk)
                .await
                .map_err(SpeechServiceError::Dependency)?;

            match outcome {
                SynthesisOutcome::Completed(audio) => {
                    let path = artifacts.write_chunk(index, &audio).await?;
                    tracing::debug!(
                        request_id = %request_id,
                        chunk_index = index,
                        audio_size = audio.len(),
                        "Chunk audio written"
                    );
                    written.push(path);
                }
                SynthesisOutcome::Canceled(details) => {
                    tracing::error!(
                        request_id = %request_id,
                        chunk_index = index,
                        reason = %details.reason,
                        error_details = ?details.error_details,
                        "Speech synthesis canceled"
                    );

                    if self.gap_policy == GapPolicy::Abort {
                        return Err(SpeechServiceError::Canceled {
                            index,
                            reason: details.to_string(),
                        });
                    }

                    gaps.push(ChunkGap {
                        index,
                        reason: details.to_string(),
                    });
                }
            }
        }

        if written.is_empty() {
            return Err(SpeechServiceError::AllChunksCanceled {
                chunk_count: chunks.len(),
            });
        }

        // 3. Assembling
        let artifact_path = artifacts.assemble(&written, artifact_name).await?;
        let audio = tokio::fs::read(&artifact_path).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            request_id = %request_id,
            latency_ms = duration.as_millis(),
            chunk_count = chunks.len(),
            missing_chunks = gaps.len(),
            audio_size_bytes = audio.len(),
            artifact = %artifact_path.display(),
            "Speech synthesis completed"
        );

        Ok(ConversionResult {
            request_id,
            artifact_path,
            audio,
            chunk_count: chunks.len(),
            gaps,
            estimate,
        })
    }
}
