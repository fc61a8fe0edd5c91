use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use narrator_backend::domain::voice::{Voice, VoiceType};
use narrator_backend::infrastructure::repositories::{
    CancellationDetails, CancellationReason, SpeechRepository, SynthesisOutcome,
};
use parking_lot::Mutex;

/// Text containing this marker is canceled by the fake provider
pub const CANCEL_MARKER: &str = "forbidden";

pub fn voice(id: &str, locale: &str, voice_type: VoiceType) -> Voice {
    Voice {
        id: id.to_string(),
        display_name: id.rsplit('-').next().unwrap_or(id).trim_end_matches("Neural").to_string(),
        locale: locale.to_string(),
        voice_type,
    }
}

/// Catalog served by every test session
pub fn catalog_voices() -> Vec<Voice> {
    vec![
        voice("en-US-JennyNeural", "en-US", VoiceType::Neural),
        voice("en-US-ZiraRUS", "en-US", VoiceType::Standard),
        voice("en-GB-RyanNeural", "en-GB", VoiceType::Neural),
        voice("es-ES-ElviraNeural", "es-ES", VoiceType::Neural),
        voice("es-MX-DaliaNeural", "es-MX", VoiceType::Neural),
        voice("fr-FR-DeniseNeural", "fr-FR", VoiceType::Neural),
    ]
}

/// Speech provider double. Audio for a chunk is `MP3[<text>]` so tests can
/// read back the order in which chunks were assembled.
#[derive(Default)]
pub struct FakeSpeechRepository {
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeSpeechRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// (voice id, text) per synthesis call, in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SpeechRepository for FakeSpeechRepository {
    async fn list_voices(&self) -> Result<Vec<Voice>, String> {
        Ok(catalog_voices())
    }

    async fn synthesize(&self, voice: &Voice, text: &str) -> Result<SynthesisOutcome, String> {
        self.calls.lock().push((voice.id.clone(), text.to_string()));

        if text.contains(CANCEL_MARKER) {
            return Ok(SynthesisOutcome::Canceled(CancellationDetails {
                reason: CancellationReason::Error,
                error_details: Some("HTTP 401: Unauthorized".to_string()),
            }));
        }

        Ok(SynthesisOutcome::Completed(
            format!("MP3[{}]", text).into_bytes(),
        ))
    }
}

/// In-memory PDF with one text line per page
pub fn sample_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
