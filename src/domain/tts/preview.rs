use crate::domain::voice::Voice;

/// Final artifact name for a voice preview, distinct from the conversion output
pub const PREVIEW_ARTIFACT: &str = "preview.mp3";

/// Fixed sample sentence in the voice's language
pub fn greeting_for(voice: &Voice) -> String {
    match voice.language_code().to_lowercase().as_str() {
        "es" => format!(
            "Hola, me llamo {}. Así es como sueno.",
            voice.display_name
        ),
        _ => format!(
            "Hello, my name is {}. This is how I sound.",
            voice.display_name
        ),
    }
}
