use super::model::Voice;
use chrono::{DateTime, Utc};

/// Voices fetched from the provider at session start. Read-only afterwards.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
    fetched_at: DateTime<Utc>,
}

impl VoiceCatalog {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            fetched_at: Utc::now(),
        }
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn find(&self, voice_id: &str) -> Option<&Voice> {
        self.voices.iter().find(|voice| voice.id == voice_id)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
