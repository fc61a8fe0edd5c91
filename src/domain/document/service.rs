use super::error::DocumentError;
use super::extractor::{extract_text, DocumentKind};
use super::language::{build_language_detector, suggest_language};
use crate::domain::voice::LanguageGroup;
use lingua::LanguageDetector;
use serde::Serialize;

/// Text pulled out of one upload, ready for estimation and conversion
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub kind: DocumentKind,
    pub text: String,
    pub characters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_language: Option<LanguageGroup>,
}

pub struct DocumentService {
    language_detector: LanguageDetector,
}

impl DocumentService {
    pub fn new() -> Self {
        Self {
            language_detector: build_language_detector(),
        }
    }

    pub fn extract(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<ExtractedDocument, DocumentError> {
        let kind = DocumentKind::detect(content_type, file_name)?;

        tracing::info!(
            file_name = ?file_name,
            content_type = ?content_type,
            kind = ?kind,
            size_bytes = bytes.len(),
            "Extracting document text"
        );

        let text = extract_text(bytes, kind).map_err(|e| {
            tracing::error!(error = %e, kind = ?kind, "Document extraction failed");
            e
        })?;
        let suggested_language = suggest_language(&self.language_detector, &text);

        Ok(ExtractedDocument {
            file_name: file_name.map(str::to_string),
            kind,
            characters: text.chars().count(),
            text,
            suggested_language,
        })
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}
