use super::speech_repository::{
    CancellationDetails, CancellationReason, SpeechRepository, SynthesisOutcome,
};
use crate::domain::voice::{Voice, VoiceType};
use crate::infrastructure::config::SpeechSecrets;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

/// Compressed mono MP3; consecutive files of this format decode fine when
/// concatenated byte for byte
pub const AUDIO_OUTPUT_FORMAT: &str = "audio-16khz-32kbitrate-mono-mp3";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Azure Cognitive Services Speech implementation of the speech repository
pub struct AzureSpeechRepository {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

// Azure voices/list response entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AzureVoice {
    /// Voice ID, e.g. "en-US-JennyNeural"
    short_name: String,
    display_name: String,
    locale: String,
    /// "Neural", "Standard", ... (absent on some sovereign clouds)
    #[serde(default)]
    voice_type: Option<String>,
}

impl From<AzureVoice> for Voice {
    fn from(voice: AzureVoice) -> Self {
        // Fall back to the short name, which carries the "Neural" suffix
        let voice_type = VoiceType::classify(voice.voice_type.as_deref().unwrap_or(&voice.short_name));

        Voice {
            id: voice.short_name,
            display_name: voice.display_name,
            locale: voice.locale,
            voice_type,
        }
    }
}

impl AzureSpeechRepository {
    /// `endpoint` replaces the regional `https://{region}.tts.speech.microsoft.com`
    pub fn new(secrets: &SpeechSecrets, endpoint: Option<String>) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("narrator-backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        let base_url = endpoint
            .unwrap_or_else(|| format!("https://{}.tts.speech.microsoft.com", secrets.region))
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            api_key: secrets.api_key.clone(),
            base_url,
        })
    }

    fn voices_url(&self) -> String {
        format!("{}/cognitiveservices/voices/list", self.base_url)
    }

    fn synthesis_url(&self) -> String {
        format!("{}/cognitiveservices/v1", self.base_url)
    }
}

/// Wrap text in the SSML envelope the synthesis endpoint expects
pub fn build_ssml(voice: &Voice, text: &str) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{}'><voice name='{}'>{}</voice></speak>",
        escape_xml(&voice.locale),
        escape_xml(&voice.id),
        escape_xml(text)
    )
}

fn escape_xml(text: &str) -> String {
    // Control characters are not allowed in XML 1.0; PDFs extract them often
    static CONTROL_CHARS: OnceLock<Regex> = OnceLock::new();
    let control_chars = CONTROL_CHARS.get_or_init(|| {
        Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").expect("valid control character pattern")
    });
    let cleaned = control_chars.replace_all(text, "");

    let mut escaped = String::with_capacity(cleaned.len());
    for c in cleaned.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[async_trait]
impl SpeechRepository for AzureSpeechRepository {
    async fn list_voices(&self) -> Result<Vec<Voice>, String> {
        tracing::info!(url = %self.voices_url(), "Fetching Azure voice list");

        let response = self
            .http
            .get(self.voices_url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Azure voice list request failed");
                format!("Azure voice list error: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(status = %status, body = %error_body, "Azure voice list rejected");
            return Err(format!("Azure voice list error ({}): {}", status, error_body));
        }

        let azure_voices: Vec<AzureVoice> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Azure voice list: {}", e))?;

        Ok(azure_voices.into_iter().map(Voice::from).collect())
    }

    async fn synthesize(&self, voice: &Voice, text: &str) -> Result<SynthesisOutcome, String> {
        let start_time = std::time::Instant::now();
        let text_preview: String = text.chars().take(80).collect();

        tracing::info!(
            voice = %voice.id,
            locale = %voice.locale,
            output_format = AUDIO_OUTPUT_FORMAT,
            text_length = text.len(),
            text_preview = %text_preview,
            "Calling Azure speech synthesis"
        );

        let response = self
            .http
            .post(self.synthesis_url())
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header(OUTPUT_FORMAT_HEADER, AUDIO_OUTPUT_FORMAT)
            .body(build_ssml(voice, text))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice = %voice.id,
                    text_length = text.len(),
                    "Azure speech synthesis request failed"
                );
                format!("Azure speech error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            // The speech SDK surfaces rejected requests as cancellations
            return Ok(SynthesisOutcome::Canceled(CancellationDetails {
                reason: CancellationReason::Error,
                error_details: Some(format!("HTTP {}: {}", status.as_u16(), error_body.trim())),
            }));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to read Azure audio stream");
                format!("Failed to read audio stream: {}", e)
            })?
            .to_vec();

        if audio.is_empty() {
            return Ok(SynthesisOutcome::Canceled(CancellationDetails {
                reason: CancellationReason::EndOfStream,
                error_details: Some("provider returned no audio".to_string()),
            }));
        }

        let duration = start_time.elapsed();
        let throughput_chars_per_sec = if duration.as_secs_f64() > 0.0 {
            text.chars().count() as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        tracing::info!(
            provider = "azure",
            latency_ms = duration.as_millis(),
            audio_size_bytes = audio.len(),
            throughput_chars_per_sec = format!("{:.2}", throughput_chars_per_sec),
            "Chunk synthesized"
        );

        Ok(SynthesisOutcome::Completed(audio))
    }
}
