pub mod document;
pub mod session;
pub mod tts;
pub mod voice;
