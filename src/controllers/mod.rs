pub mod documents;
pub mod health;
pub mod tts;
pub mod voices;
